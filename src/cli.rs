use std::fmt::Write;
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::{Color, Stylize};

use crate::catalog::Catalog;

/// Rewrite hex color literals in a text file to the nearest colors of a palette.
#[derive(Parser, Debug)]
#[command(name = "recolor", version, about)]
pub struct Args {
    /// Text file to recolor (`-` reads stdin)
    #[arg(required_unless_present = "list")]
    pub input: Option<PathBuf>,

    /// Palette to match colors against (case-insensitive)
    #[arg(short, long, required_unless_present = "list")]
    pub palette: Option<String>,

    /// Additional palette catalog in TOML format; may be repeated
    #[arg(long = "palette-file", value_name = "PATH")]
    pub palette_files: Vec<PathBuf>,

    /// Write the result here instead of `<input>-<palette>.<ext>`
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// List available palettes and exit
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One line per palette: name, color count and, if `swatches`, a truecolor strip.
pub fn palette_listing(catalog: &Catalog, swatches: bool) -> String {
    let width = catalog.iter().map(|p| p.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for palette in catalog.iter() {
        let _ = write!(
            out,
            "{:<width$}  {:>3} colors",
            palette.name(),
            palette.len()
        );
        if swatches {
            out.push_str("  ");
            for c in palette.colors() {
                let swatch = "  ".on(Color::Rgb {
                    r: c.r,
                    g: c.g,
                    b: c.b,
                });
                let _ = write!(out, "{swatch}");
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Palette;

    #[test]
    fn args_parse_palette_and_input() {
        let args = Args::try_parse_from(["recolor", "site.css", "-p", "Nord", "-vv"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("site.css")));
        assert_eq!(args.palette.as_deref(), Some("Nord"));
        assert_eq!(args.verbose, 2);
        assert!(!args.stdout);
    }

    #[test]
    fn list_needs_no_input_or_palette() {
        let args = Args::try_parse_from(["recolor", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.input.is_none());
    }

    #[test]
    fn palette_is_required_for_rewrites() {
        assert!(Args::try_parse_from(["recolor", "site.css"]).is_err());
    }

    #[test]
    fn output_conflicts_with_stdout() {
        let result =
            Args::try_parse_from(["recolor", "a.css", "-p", "Nord", "-o", "b.css", "--stdout"]);
        assert!(result.is_err());
    }

    #[test]
    fn palette_files_repeat() {
        let args = Args::try_parse_from([
            "recolor",
            "--list",
            "--palette-file",
            "a.toml",
            "--palette-file",
            "b.toml",
        ])
        .unwrap();
        assert_eq!(args.palette_files.len(), 2);
    }

    #[test]
    fn plain_listing_aligns_names() {
        let catalog = Catalog::new(vec![
            Palette::new("A", &["#000", "#fff"]).unwrap(),
            Palette::new("Longer", &["#123456"]).unwrap(),
        ])
        .unwrap();
        let listing = palette_listing(&catalog, false);
        assert_eq!(listing, "A         2 colors\nLonger    1 colors\n");
    }

    #[test]
    fn swatch_listing_uses_truecolor() {
        let catalog = Catalog::new(vec![Palette::new("A", &["#102030"]).unwrap()]).unwrap();
        let plain = palette_listing(&catalog, false);
        let listing = palette_listing(&catalog, true);
        assert!(listing.starts_with(plain.trim_end()), "got {listing:?}");
        assert!(listing.len() > plain.len() + 2, "got {listing:?}");
    }
}
