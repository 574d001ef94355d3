//! Deterministic directory traversal
//!
//! The walker visits directories top-down, depth-first, pruning excluded
//! directories before descending. Sibling directories and file names are
//! both sorted lexicographically so the sequence is reproducible across
//! runs and platforms regardless of the filesystem's native iteration
//! order.

use std::fs;
use std::path::PathBuf;

use crate::error::{CodepackError, CodepackResult};
use crate::policy::SelectionPolicy;

/// One visited directory: its path plus its sorted file names
///
/// File names are everything in the directory that is not itself a
/// directory; the per-file selection rules are applied by the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub file_names: Vec<String>,
}

/// Depth-first iterator over a project tree
///
/// Yields a [`DirectoryListing`] for each visited directory, parent before
/// children. A directory rejected by the policy is never read, so nothing
/// beneath it can appear in the sequence. Directory-read failures surface
/// as `Err` items and are fatal to the run.
#[derive(Debug)]
pub struct Walker<'a> {
    policy: &'a SelectionPolicy,
    pending: Vec<PathBuf>,
}

impl<'a> Walker<'a> {
    /// Start a traversal rooted at `root`
    pub fn new(root: impl Into<PathBuf>, policy: &'a SelectionPolicy) -> CodepackResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CodepackError::DirectoryNotFound { path: root });
        }
        Ok(Self {
            policy,
            pending: vec![root],
        })
    }

    fn list_directory(&mut self, dir: PathBuf) -> CodepackResult<DirectoryListing> {
        let entries = fs::read_dir(&dir).map_err(|source| CodepackError::ReadDir {
            path: dir.clone(),
            source,
        })?;

        let mut subdir_names = Vec::new();
        let mut file_names = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|source| CodepackError::ReadDir {
                path: dir.clone(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| CodepackError::ReadDir {
                path: entry.path(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if file_type.is_dir() {
                subdir_names.push(name);
            } else {
                file_names.push(name);
            }
        }

        // Prune before descending: an excluded directory and everything
        // beneath it never enters the pending stack.
        subdir_names.retain(|name| self.policy.should_process(&dir.join(name), true));
        subdir_names.sort();
        // Push in reverse so the lexicographically first subdirectory is
        // popped (and therefore visited) next.
        for name in subdir_names.into_iter().rev() {
            self.pending.push(dir.join(name));
        }

        file_names.sort();

        Ok(DirectoryListing {
            path: dir,
            file_names,
        })
    }
}

impl Iterator for Walker<'_> {
    type Item = CodepackResult<DirectoryListing>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.pending.pop()?;
        Some(self.list_directory(dir))
    }
}
