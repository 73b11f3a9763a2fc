//! Opening the source and destination streams handed to the decoder.
//!
//! `-` selects stdin / stdout; anything else is a filesystem path.
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Open `path` for buffered reading.
///
/// # Errors
///
/// Returns `cannot open <path>` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Create (or truncate) `path` for buffered writing.
///
/// # Errors
///
/// Returns `cannot create <path>` if the file cannot be created.
pub fn create_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Display name for diagnostics: `<stdin>` / `<stdout>` for `-`.
pub fn display_name(path: &Path, stdio_name: &'static str) -> String {
    if is_stdio(path) {
        stdio_name.to_string()
    } else {
        path.display().to_string()
    }
}
