use crate::catalog::Palette;
use crate::error::RecolorError;

use super::matcher::Matcher;
use super::scan::scan;

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Color tokens recognized in the input.
    pub tokens: usize,
    /// Tokens whose literal text changed.
    pub changed: usize,
}

/// Replace every color token in `text` with its nearest palette color.
///
/// Non-token text is copied verbatim. Fails without producing output if the
/// palette is empty.
pub fn rewrite(text: &str, palette: &Palette) -> Result<String, RecolorError> {
    rewrite_with_report(text, palette).map(|r| r.text)
}

/// Like [`rewrite`], also counting recognized and changed tokens.
pub fn rewrite_with_report(text: &str, palette: &Palette) -> Result<Rewrite, RecolorError> {
    let matcher = Matcher::new(palette)?;

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut tokens = 0;
    let mut changed = 0;

    for token in scan(text) {
        let replacement = token.replacement(matcher.nearest(token.color));
        tracing::debug!(
            offset = token.span.start,
            from = token.text,
            to = %replacement,
            "rewrote color"
        );

        out.push_str(&text[last..token.span.start]);
        out.push_str(&replacement);
        last = token.span.end;

        tokens += 1;
        if replacement != token.text {
            changed += 1;
        }
    }
    out.push_str(&text[last..]);

    Ok(Rewrite {
        text: out,
        tokens,
        changed,
    })
}
