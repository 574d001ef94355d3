//! Error types for codepack
//!
//! Uses `thiserror` for library errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for codepack operations
pub type CodepackResult<T> = Result<T, CodepackError>;

/// Main error type for codepack operations
///
/// Only run-fatal conditions live here. A source file that cannot be read
/// is not an error at this level: the snapshot records a placeholder for it
/// and the run continues.
#[derive(Error, Debug)]
pub enum CodepackError {
    /// Snapshot root is missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A directory could not be listed during traversal
    #[error("cannot read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    /// The output document could not be created or written
    #[error("cannot write snapshot '{path}': {source}")]
    OutputIo { path: PathBuf, source: io::Error },
}
