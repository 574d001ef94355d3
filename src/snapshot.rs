//! Snapshot serialization
//!
//! Streams every selected file into a single output document behind a
//! fixed delimiting header. The header format is a compatibility contract
//! and must stay byte-for-byte stable:
//!
//! ```text
//! \n<80 '='>\n--- File: <path> ---\n<80 '='>\n\n<lossily decoded contents>
//! ```
//!
//! A file that cannot be read keeps its header and gets a one-line
//! placeholder instead of contents; only output-side I/O failures abort
//! the run.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CodepackError, CodepackResult};
use crate::policy::SelectionPolicy;
use crate::walker::Walker;

/// Fixed name of the output document, created in the working directory
pub const OUTPUT_FILE_NAME: &str = "project_code.txt";

/// Width of the `=` rule lines delimiting each file header
const HEADER_RULE_WIDTH: usize = 80;

/// Options for a snapshot run
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    /// Directory to snapshot
    pub root: PathBuf,
    /// Destination of the output document
    pub output: PathBuf,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

/// Snapshot progress events for NDJSON output
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SnapshotEvent {
    Started { root: String },
    FileAdded { path: String },
    FileFailed { path: String, reason: String },
    Completed { output: String, added: usize, failed: usize },
}

impl SnapshotEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A file whose contents could not be read
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub reason: String,
}

/// Outcome of a snapshot run
///
/// `failed` entries still occupy a section in the output document; they
/// count as processed, just without contents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SnapshotReport {
    pub added: Vec<String>,
    pub failed: Vec<FileFailure>,
}

impl SnapshotReport {
    /// True when every selected file was read and written in full
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of sections written to the output document
    pub fn files_processed(&self) -> usize {
        self.added.len() + self.failed.len()
    }
}

fn write_header(out: &mut impl Write, path: &Path) -> io::Result<()> {
    let rule = "=".repeat(HEADER_RULE_WIDTH);
    write!(out, "\n{rule}\n--- File: {} ---\n{rule}\n\n", path.display())
}

/// Walk `options.root` and write the snapshot document
///
/// Progress is reported through `on_event`; the callback is presentation
/// only and never affects what gets written.
pub fn write_snapshot(
    options: &SnapshotOptions,
    policy: &SelectionPolicy,
    mut on_event: impl FnMut(SnapshotEvent),
) -> CodepackResult<SnapshotReport> {
    let walker = Walker::new(options.root.clone(), policy)?;

    let output_err = |source: io::Error| CodepackError::OutputIo {
        path: options.output.clone(),
        source,
    };

    let file = File::create(&options.output).map_err(output_err)?;
    let mut out = BufWriter::new(file);

    on_event(SnapshotEvent::Started {
        root: options.root.display().to_string(),
    });

    let mut report = SnapshotReport::default();

    for listing in walker {
        let listing = listing?;
        for name in &listing.file_names {
            let file_path = listing.path.join(name);
            if !policy.should_process(&file_path, false) {
                continue;
            }

            let display = file_path.display().to_string();
            write_header(&mut out, &file_path).map_err(output_err)?;

            match fs::read(&file_path) {
                Ok(bytes) => {
                    out.write_all(String::from_utf8_lossy(&bytes).as_bytes())
                        .map_err(output_err)?;
                    on_event(SnapshotEvent::FileAdded {
                        path: display.clone(),
                    });
                    report.added.push(display);
                }
                Err(err) => {
                    writeln!(out, "*** Could not read file: {err} ***").map_err(output_err)?;
                    on_event(SnapshotEvent::FileFailed {
                        path: display.clone(),
                        reason: err.to_string(),
                    });
                    report.failed.push(FileFailure {
                        path: display,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    out.flush().map_err(output_err)?;

    on_event(SnapshotEvent::Completed {
        output: options.output.display().to_string(),
        added: report.added.len(),
        failed: report.failed.len(),
    });

    Ok(report)
}
