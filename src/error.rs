// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while stamping the version into the generated source.
///
/// Each variant names the path involved and chains the underlying OS error.
#[derive(Debug, Error)]
pub enum StampError {
    #[error("failed to read version file {}: {source}", .path.display())]
    ReadVersion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove stale output {}: {source}", .path.display())]
    RemoveStale {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated source {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StampError>;
