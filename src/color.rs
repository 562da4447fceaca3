use std::fmt;
use std::str::FromStr;

use palette::white_point::D65;
use palette::{IntoColor, Lab, Srgb};

use crate::error::RecolorError;

/// CIELAB coordinates under the D65 reference white.
pub type LabColor = Lab<D65, f64>;

/// An sRGB color parsed from hex and canonicalized to `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb`, case-insensitive.
    ///
    /// Shorthand digits are duplicated, so `f0a` becomes `ff00aa`.
    pub fn from_hex(hex: &str) -> Result<Self, RecolorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RecolorError::InvalidColor(hex.to_string()));
        }
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => Ok(Self {
                r: nibble(bytes[0]) * 17,
                g: nibble(bytes[1]) * 17,
                b: nibble(bytes[2]) * 17,
            }),
            6 => Ok(Self {
                r: (nibble(bytes[0]) << 4) | nibble(bytes[1]),
                g: (nibble(bytes[2]) << 4) | nibble(bytes[3]),
                b: (nibble(bytes[4]) << 4) | nibble(bytes[5]),
            }),
            _ => Err(RecolorError::InvalidColor(hex.to_string())),
        }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to CIELAB (D65) for perceptual comparison.
    ///
    /// Decodes the sRGB transfer curve, maps linear RGB to XYZ and XYZ to Lab.
    pub fn to_lab(self) -> LabColor {
        let srgb: Srgb<f64> = self.to_srgb_u8().into_format();
        srgb.into_color()
    }

    /// CIEDE2000 distance between two hex colors.
    pub fn delta_e(self, other: HexColor) -> f64 {
        delta_e_2000(self.to_lab(), other.to_lab())
    }
}

/// Value of an ASCII hex digit. Callers check `is_ascii_hexdigit` first.
fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// 25^7, the chroma normalization constant of CIEDE2000.
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle in degrees, in [0, 360). Zero for achromatic input.
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 color difference with unit weighting factors (kL = kC = kH = 1).
///
/// Follows CIE 142-2001 including the `RT` hue-rotation term. Returns 0 exactly
/// when both inputs are identical.
pub fn delta_e_2000(lab1: LabColor, lab2: LabColor) -> f64 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    // a' rescaling to fix blue-region chroma
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());
    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_degrees(b1, a1p);
    let h2p = hue_degrees(b2, a2p);
    let chroma_product = c1p * c2p;

    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;
    let delta_h_angle = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_h = 2.0 * chroma_product.sqrt() * (delta_h_angle / 2.0).to_radians().sin();

    let l_bar = (l1 + l2) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;
    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let l_dev = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_dev / (20.0 + l_dev).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;

    let dl = delta_l / s_l;
    let dc = delta_c / s_c;
    let dh = delta_h / s_h;

    (dl * dl + dc * dc + dh * dh + r_t * dc * dh).max(0.0).sqrt()
}
