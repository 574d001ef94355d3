//! codepack - project snapshot builder
//!
//! codepack walks a project directory, selects source files by
//! name/extension rules while excluding build artifacts and tooling
//! directories, and concatenates their contents into a single text file
//! with delimiting headers - a shareable snapshot of the codebase.

pub mod error;
pub mod policy;
pub mod snapshot;
pub mod walker;

// Re-exports for convenience
pub use error::{CodepackError, CodepackResult};
pub use policy::SelectionPolicy;
pub use snapshot::{
    write_snapshot, FileFailure, SnapshotEvent, SnapshotOptions, SnapshotReport, OUTPUT_FILE_NAME,
};
pub use walker::{DirectoryListing, Walker};
