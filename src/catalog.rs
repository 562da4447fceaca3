//! Named palettes and the catalog they are selected from.
//!
//! A catalog is an explicit value: the built-in palettes plus anything loaded
//! from TOML files. Callers pick one `Palette` and pass it to the rewriter.

use std::path::Path;

use serde::Deserialize;

use crate::color::HexColor;
use crate::error::RecolorError;

/// A named, ordered set of colors. Order decides ties during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<HexColor>,
}

impl Palette {
    /// Build a palette, validating every entry as 3- or 6-digit hex.
    ///
    /// An empty entry list is accepted here; matching against it fails later
    /// with [`RecolorError::EmptyPalette`].
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        entries: &[S],
    ) -> Result<Self, RecolorError> {
        let name = name.into();
        let colors = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry = entry.as_ref();
                HexColor::from_hex(entry.trim()).map_err(|_| {
                    RecolorError::InvalidPaletteEntry {
                        palette: name.clone(),
                        index,
                        entry: entry.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, colors })
    }

    /// Build a palette from already-parsed colors.
    pub fn from_colors(name: impl Into<String>, colors: Vec<HexColor>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Lowercased name with whitespace runs collapsed to `-`, for file names.
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "palette")]
    palettes: Vec<PaletteRecord>,
}

#[derive(Debug, Deserialize)]
struct PaletteRecord {
    name: String,
    colors: Vec<String>,
}

/// An ordered collection of palettes with unique (case-insensitive) names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    palettes: Vec<Palette>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(palettes: Vec<Palette>) -> Result<Self, RecolorError> {
        let mut catalog = Self::default();
        for palette in palettes {
            catalog.push(palette)?;
        }
        Ok(catalog)
    }

    /// The palettes compiled into the binary.
    pub fn builtin() -> Self {
        let palettes = BUILTIN
            .iter()
            .map(|(name, colors)| {
                let colors = colors
                    .iter()
                    .map(|&v| HexColor::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
                    .collect();
                Palette::from_colors(*name, colors)
            })
            .collect();
        Self { palettes }
    }

    /// Parse a TOML catalog made of `[[palette]]` tables with `name` and `colors`.
    pub fn from_toml_str(source: &str) -> Result<Self, RecolorError> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| RecolorError::Catalog(e.to_string()))?;
        let palettes = file
            .palettes
            .into_iter()
            .map(|record| Palette::new(record.name, &record.colors))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(palettes)
    }

    /// Read and parse a TOML catalog file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read palette file: {}", path.display()))?;
        let catalog = Self::from_toml_str(&source)
            .with_context(|| format!("failed to load palette file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), palettes = catalog.len(), "loaded palette file");
        Ok(catalog)
    }

    /// Append a palette, failing if its name is already taken.
    pub fn push(&mut self, palette: Palette) -> Result<(), RecolorError> {
        if self.find(palette.name()).is_some() {
            return Err(RecolorError::DuplicatePalette(palette.name().to_string()));
        }
        self.palettes.push(palette);
        Ok(())
    }

    /// Append every palette of `other` after the existing ones.
    pub fn extend(&mut self, other: Catalog) -> Result<(), RecolorError> {
        for palette in other.palettes {
            self.push(palette)?;
        }
        Ok(())
    }

    /// Look up a palette by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Palette> {
        self.palettes
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`Catalog::find`], but a miss is an error.
    pub fn get(&self, name: &str) -> Result<&Palette, RecolorError> {
        self.find(name)
            .ok_or_else(|| RecolorError::UnknownPalette(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(Palette::name).collect()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

const BUILTIN: &[(&str, &[u32])] = &[
    (
        "Nord",
        &[
            0x2e3440, 0x3b4252, 0x434c5e, 0x4c566a, 0xd8dee9, 0xe5e9f0, 0xeceff4, 0x8fbcbb,
            0x88c0d0, 0x81a1c1, 0x5e81ac, 0xbf616a, 0xd08770, 0xebcb8b, 0xa3be8c, 0xb48ead,
        ],
    ),
    (
        "Dracula",
        &[
            0x282a36, 0x44475a, 0xf8f8f2, 0x6272a4, 0x8be9fd, 0x50fa7b, 0xffb86c, 0xff79c6,
            0xbd93f9, 0xff5555, 0xf1fa8c,
        ],
    ),
    (
        "Gruvbox Dark",
        &[
            0x282828, 0xcc241d, 0x98971a, 0xd79921, 0x458588, 0xb16286, 0x689d6a, 0xa89984,
            0x928374, 0xfb4934, 0xb8bb26, 0xfabd2f, 0x83a598, 0xd3869b, 0x8ec07c, 0xebdbb2,
        ],
    ),
    (
        "Solarized",
        &[
            0x002b36, 0x073642, 0x586e75, 0x657b83, 0x839496, 0x93a1a1, 0xeee8d5, 0xfdf6e3,
            0xb58900, 0xcb4b16, 0xdc322f, 0xd33682, 0x6c71c4, 0x268bd2, 0x2aa198, 0x859900,
        ],
    ),
    (
        "Catppuccin Mocha",
        &[
            0xf5e0dc, 0xf2cdcd, 0xf5c2e7, 0xcba6f7, 0xf38ba8, 0xeba0ac, 0xfab387, 0xf9e2af,
            0xa6e3a1, 0x94e2d5, 0x89dceb, 0x74c7ec, 0x89b4fa, 0xb4befe, 0xcdd6f4, 0xbac2de,
            0xa6adc8, 0x9399b2, 0x7f849c, 0x6c7086, 0x585b70, 0x45475a, 0x313244, 0x1e1e2e,
            0x181825, 0x11111b,
        ],
    ),
];
