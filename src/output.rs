use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::Palette;

/// Path argument that means stdin.
pub const STDIN: &str = "-";

/// Output path next to `input`, with `-<palette slug>` before the extension.
///
/// `styles/theme.css` with "Gruvbox Dark" becomes `styles/theme-gruvbox-dark.css`.
pub fn derived_path(input: &Path, palette: &Palette) -> PathBuf {
    let slug = palette.slug();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}-{slug}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{slug}"),
    };
    input.with_file_name(name)
}

/// Read the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!("failed to read {} as UTF-8 text", path.display())
        }
    })
}

/// Write `content` to `path`, creating parent directories.
pub fn write_to(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write output to {}", path.display()))?;
    Ok(())
}

pub fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write to stdout")
}
