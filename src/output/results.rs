//! Results file sink
//!
//! Persists a ladder for later reading, replacing whatever was there.

use super::formatters::ladder_report;
use crate::ladder::Ladder;
use std::fs;
use std::io;
use std::path::Path;

/// Write `ladder` to `path`, overwriting any existing file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_ladder<P: AsRef<Path>>(path: P, ladder: &Ladder) -> io::Result<()> {
    fs::write(path, ladder_report(ladder))
}
