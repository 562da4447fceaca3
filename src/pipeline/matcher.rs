use crate::catalog::Palette;
use crate::color::{delta_e_2000, HexColor, LabColor};
use crate::error::RecolorError;

/// The palette entry chosen for a target color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub color: HexColor,
    /// Position of the winning entry in the palette.
    pub index: usize,
    /// CIEDE2000 distance from the target.
    pub distance: f64,
}

/// Nearest-color lookup against one palette, with entry Lab values computed once.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    palette: &'a Palette,
    labs: Vec<LabColor>,
}

impl<'a> Matcher<'a> {
    /// Prepare a matcher. Fails if the palette has no colors.
    pub fn new(palette: &'a Palette) -> Result<Self, RecolorError> {
        if palette.is_empty() {
            return Err(RecolorError::EmptyPalette(palette.name().to_string()));
        }
        let labs = palette.colors().iter().map(|c| c.to_lab()).collect();
        Ok(Self { palette, labs })
    }

    /// Find the entry with minimum CIEDE2000 distance to `target`.
    ///
    /// Ties go to the earliest entry in palette order.
    pub fn nearest_match(&self, target: HexColor) -> Match {
        let target_lab = target.to_lab();
        let colors = self.palette.colors();

        // `new` guarantees at least one entry.
        let mut best = Match {
            color: colors[0],
            index: 0,
            distance: f64::INFINITY,
        };
        for (index, (color, lab)) in colors.iter().zip(&self.labs).enumerate() {
            let distance = delta_e_2000(target_lab, *lab);
            if distance < best.distance {
                best = Match {
                    color: *color,
                    index,
                    distance,
                };
            }
        }

        tracing::trace!(
            color = %target,
            matched = %best.color,
            index = best.index,
            distance = best.distance,
            "nearest palette color"
        );
        best
    }

    pub fn nearest(&self, target: HexColor) -> HexColor {
        self.nearest_match(target).color
    }
}

/// Palette entry perceptually nearest to `target`.
pub fn nearest(target: HexColor, palette: &Palette) -> Result<HexColor, RecolorError> {
    Ok(Matcher::new(palette)?.nearest(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::from_hex(s).unwrap()
    }

    #[test]
    fn red_maps_to_blue_over_green() {
        let palette = Palette::new("RGB", &["#00FF00", "#0000FF"]).unwrap();
        assert_eq!(nearest(hex("#ff0000"), &palette).unwrap(), hex("#0000ff"));
    }

    #[test]
    fn exact_member_matches_itself() {
        let palette = Palette::new("Pair", &["#336699", "#ff0000"]).unwrap();
        let m = Matcher::new(&palette).unwrap().nearest_match(hex("#336699"));
        assert_eq!(m.color, hex("#336699"));
        assert_eq!(m.index, 0);
        assert_eq!(m.distance, 0.0);
    }

    #[test]
    fn ties_go_to_first_entry() {
        let palette = Palette::new("Dupes", &["#808080", "#123456", "#808080"]).unwrap();
        let m = Matcher::new(&palette).unwrap().nearest_match(hex("#7f7f7f"));
        assert_eq!(m.index, 0);
    }

    #[test]
    fn single_entry_always_wins() {
        let palette = Palette::new("One", &["#abcdef"]).unwrap();
        let matcher = Matcher::new(&palette).unwrap();
        for target in ["#000000", "#ffffff", "#ff0000"] {
            assert_eq!(matcher.nearest(hex(target)), hex("#abcdef"));
        }
    }

    #[test]
    fn black_and_white_split_grays() {
        let palette = Palette::new("Mono", &["#000", "#fff"]).unwrap();
        let matcher = Matcher::new(&palette).unwrap();
        assert_eq!(matcher.nearest(hex("#222222")), hex("#000000"));
        assert_eq!(matcher.nearest(hex("#dddddd")), hex("#ffffff"));
    }

    #[test]
    fn empty_palette_is_reported() {
        let palette = Palette::from_colors("Empty", Vec::new());
        assert_eq!(
            nearest(hex("#ffffff"), &palette).unwrap_err(),
            RecolorError::EmptyPalette("Empty".into())
        );
    }
}
