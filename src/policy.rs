//! Selection policy for snapshot contents
//!
//! A `SelectionPolicy` is the immutable rule bundle deciding which
//! filesystem entries end up in the snapshot. It is constructed once at
//! startup and passed explicitly to the walker and serializer; the
//! predicate itself never touches the filesystem.

use std::path::Path;

/// Directories that are pruned from traversal entirely
const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", ".vscode"];

/// Files excluded by exact name, overriding every inclusion rule
const EXCLUDED_FILES: &[&str] = &["package-lock.json"];

/// Files included by exact name even when no suffix rule matches
const INCLUDED_FILES: &[&str] = &[
    "README.md",
    "package.json",
    ".gitignore",
    "vite.config.js",
    "tailwind.config.js",
    "postcss.config.js",
];

/// Literal path suffixes that select a file for inclusion
///
/// These are plain string suffixes, not parsed extensions, so compound
/// names like `tailwind.config.js` match `.config.js` as well as `.js`.
const INCLUDED_EXTENSIONS: &[&str] = &[
    ".vue",
    ".js",
    ".css",
    ".html",
    ".json",
    ".md",
    ".config.js",
];

/// Immutable inclusion/exclusion rules for a snapshot run
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPolicy {
    excluded_dirs: Vec<String>,
    excluded_files: Vec<String>,
    included_files: Vec<String>,
    included_extensions: Vec<String>,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(
            EXCLUDED_DIRS.iter().copied(),
            EXCLUDED_FILES.iter().copied(),
            INCLUDED_FILES.iter().copied(),
            INCLUDED_EXTENSIONS.iter().copied(),
        )
    }
}

impl SelectionPolicy {
    /// Build a policy from explicit rule sets
    pub fn new<I, S>(excluded_dirs: I, excluded_files: I, included_files: I, included_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_dirs: excluded_dirs.into_iter().map(Into::into).collect(),
            excluded_files: excluded_files.into_iter().map(Into::into).collect(),
            included_files: included_files.into_iter().map(Into::into).collect(),
            included_extensions: included_extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Decide whether an entry should be processed
    ///
    /// Directories are only ever matched against the excluded-directories
    /// set; inclusion rules never apply to them. For files, exclusion by
    /// name takes precedence over every inclusion rule, then explicit
    /// inclusion by name, then a case-sensitive literal suffix match
    /// against the whole path.
    pub fn should_process(&self, path: &Path, is_dir: bool) -> bool {
        let name = path.file_name().map(|n| n.to_string_lossy());

        if is_dir {
            return match name {
                Some(name) => !self.excluded_dirs.iter().any(|d| *d == name),
                None => true,
            };
        }

        if let Some(name) = name {
            if self.excluded_files.iter().any(|f| *f == name) {
                return false;
            }
            if self.included_files.iter().any(|f| *f == name) {
                return true;
            }
        }

        let path = path.to_string_lossy();
        self.included_extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}
