// src/stamp.rs
//! The version stamper: reads the `VERSION` file and regenerates
//! `src/VERSION.cpp` with the embedded version constants.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, StampError};
use crate::render;

/// Relative path of the version file read on every run.
pub const VERSION_FILE: &str = "VERSION";
/// Relative path of the generated source file.
pub const OUTPUT_FILE: &str = "src/VERSION.cpp";

/// Stamps the version from [`VERSION_FILE`] into [`OUTPUT_FILE`], both
/// resolved against the current working directory.
pub fn run() -> Result<()> {
    run_at(Path::new("."))
}

/// Same as [`run`] with the fixed relative paths resolved against `root`.
///
/// The version text is read before anything is mutated, so a missing or
/// unreadable version file leaves a previously generated output untouched.
/// The stale output is then removed (a missing file is not an error) and
/// the new source is written in a single bulk write. The parent directory
/// of the output must already exist.
pub fn run_at(root: &Path) -> Result<()> {
    let input = root.join(VERSION_FILE);
    let version = fs::read_to_string(&input)
        .map_err(|source| StampError::ReadVersion { path: input, source })?;

    let output = root.join(OUTPUT_FILE);
    remove_stale(&output)?;

    fs::write(&output, render::render_source(&version))
        .map_err(|source| StampError::WriteOutput { path: output, source })?;
    Ok(())
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StampError::RemoveStale { path: path.to_owned(), source }),
    }
}
