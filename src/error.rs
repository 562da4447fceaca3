//! Error types for palette handling and color rewriting.

use thiserror::Error;

/// Errors produced by the recolor library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecolorError {
    /// A string was not a 3- or 6-digit hex color.
    #[error("invalid hex color: {0}")]
    InvalidColor(String),

    /// A palette entry failed to parse when the palette was built.
    #[error("invalid entry #{index} in palette '{palette}': {entry:?} is not a 3- or 6-digit hex color")]
    InvalidPaletteEntry {
        palette: String,
        index: usize,
        entry: String,
    },

    /// Nearest-color lookup against a palette with no colors.
    #[error("palette '{0}' has no colors")]
    EmptyPalette(String),

    /// No palette with this name exists in the catalog.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// Two palettes in one catalog share a name.
    #[error("duplicate palette name: {0}")]
    DuplicatePalette(String),

    /// A palette catalog file could not be parsed.
    #[error("invalid palette catalog: {0}")]
    Catalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_palette_entry_names_palette_index_and_entry() {
        let err = RecolorError::InvalidPaletteEntry {
            palette: "Brand".into(),
            index: 3,
            entry: "#12345".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Brand"), "missing palette name in: {msg}");
        assert!(msg.contains('3'), "missing index in: {msg}");
        assert!(msg.contains("#12345"), "missing entry in: {msg}");
    }

    #[test]
    fn empty_palette_names_palette() {
        let msg = RecolorError::EmptyPalette("Nothing".into()).to_string();
        assert!(msg.contains("Nothing"), "missing palette name in: {msg}");
    }

    #[test]
    fn recolor_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecolorError>();
    }
}
