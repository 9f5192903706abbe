//! Error types for scanning
//!
//! Only [`ScanError`] stops a run. [`FileError`] is recorded per file and the
//! scan moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error: the run cannot start
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid input: {0:?} does not exist or is not a directory")]
    InvalidInput(PathBuf),
}

/// No codec in the chain accepted the file's bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("none of the encodings [{}] could decode the content", .tried.join(", "))]
pub struct DecodeError {
    pub tried: Vec<&'static str>,
}

/// Per-file failure. The file is counted as skipped.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    Processing(#[from] std::io::Error),
}
