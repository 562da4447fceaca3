//! Recognition of `#`-prefixed hex color literals in free text.
//!
//! A candidate is `#` followed by the longest run of hex digits, which must end
//! at an ASCII word boundary: any non-ASCII character after the run ends it. The run is then classified by its exact length:
//!
//! | digits | color         | alpha             |
//! |--------|---------------|-------------------|
//! | 3      | `RGB` doubled | none              |
//! | 4      | `RGB` doubled | 4th digit doubled |
//! | 6      | `RRGGBB`      | none              |
//! | 8      | `RRGGBB`      | last two digits   |
//!
//! Any other length (`#12345`, `#1234567`, hashes, ids) is not a token and is
//! never partially matched.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::HexColor;

static HEX_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([0-9A-Fa-f]+)(?-u:\b)").expect("hex run pattern is valid")
});

/// A recognized color literal and where it sits in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken<'a> {
    /// Byte range of the whole literal, `#` included.
    pub span: Range<usize>,
    /// The literal exactly as written.
    pub text: &'a str,
    pub color: HexColor,
    /// Two alpha digits, case preserved. `None` for 3- and 6-digit forms.
    pub alpha: Option<Cow<'a, str>>,
}

impl ColorToken<'_> {
    /// The literal with its color replaced and the alpha digits kept.
    pub fn replacement(&self, color: HexColor) -> String {
        match &self.alpha {
            Some(alpha) => format!("{color}{alpha}"),
            None => color.to_hex(),
        }
    }
}

/// Split a digit run into color and alpha parts by its length.
fn classify(digits: &str) -> Option<(HexColor, Option<Cow<'_, str>>)> {
    match digits.len() {
        3 | 6 => Some((HexColor::from_hex(digits).ok()?, None)),
        4 => {
            let color = HexColor::from_hex(&digits[..3]).ok()?;
            let alpha = digits[3..].repeat(2);
            Some((color, Some(Cow::Owned(alpha))))
        }
        8 => {
            let color = HexColor::from_hex(&digits[..6]).ok()?;
            Some((color, Some(Cow::Borrowed(&digits[6..]))))
        }
        _ => None,
    }
}

/// Non-overlapping color tokens in `text`, left to right.
pub fn scan(text: &str) -> impl Iterator<Item = ColorToken<'_>> {
    HEX_RUN.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let (color, alpha) = classify(caps.get(1)?.as_str())?;
        Some(ColorToken {
            span: whole.range(),
            text: whole.as_str(),
            color,
            alpha,
        })
    })
}
