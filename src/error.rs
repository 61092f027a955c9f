//! Error taxonomy for a single classification call.
//!
//! Only missing/invalid roots propagate to the caller. Per-file read
//! failures are recovered locally (skip, log at debug) and never surface as
//! a failure of the whole classification.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to access {}: {}", path.display(), source)]
    Io { path: PathBuf, source: io::Error },
}
