use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use recolor::cli::{palette_listing, Args};
use recolor::{logging, output, rewrite_with_report, Catalog};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let catalog = load_catalog(&args.palette_files)?;

    if args.list {
        let swatches = std::io::stdout().is_terminal();
        return output::write_stdout(&palette_listing(&catalog, swatches));
    }

    let name = args.palette.as_deref().context("--palette is required")?;
    let palette = catalog.get(name).map_err(|e| {
        anyhow!("{e} (available: {})", catalog.names().join(", "))
    })?;
    let input = args.input.as_deref().context("an input file is required")?;

    let content = output::read_input(input)?;
    let result = rewrite_with_report(&content, palette)
        .with_context(|| format!("failed to recolor {}", input.display()))?;
    tracing::info!(
        palette = palette.name(),
        tokens = result.tokens,
        changed = result.changed,
        "recolored input"
    );

    match destination(&args, input, palette) {
        None => output::write_stdout(&result.text),
        Some(path) => {
            output::write_to(&path, &result.text)?;
            eprintln!(
                "recolor: wrote {} ({} of {} colors changed)",
                path.display(),
                result.changed,
                result.tokens
            );
            Ok(())
        }
    }
}

/// Built-in palettes followed by every `--palette-file`, in order.
fn load_catalog(files: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    for file in files {
        let extra = Catalog::load(file)?;
        catalog
            .extend(extra)
            .with_context(|| format!("failed to merge palette file: {}", file.display()))?;
    }
    Ok(catalog)
}

/// Output file, or `None` for stdout.
fn destination(args: &Args, input: &Path, palette: &recolor::Palette) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    if args.stdout || input.as_os_str() == output::STDIN {
        return None;
    }
    Some(output::derived_path(input, palette))
}
