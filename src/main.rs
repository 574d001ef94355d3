//! codepack CLI - project snapshot builder
//!
//! Usage: codepack [--root <PATH>] [--json] [--quiet]
//!
//! Walks the project tree and concatenates every selected source file
//! into `project_code.txt` in the working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use codepack::{write_snapshot, SelectionPolicy, SnapshotEvent, SnapshotOptions, OUTPUT_FILE_NAME};

/// codepack - pack a project's source tree into one reviewable text file
#[derive(Parser, Debug)]
#[command(name = "codepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to snapshot
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output format for CI (NDJSON events)
    #[arg(long)]
    json: bool,

    /// Suppress per-file progress lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmd_snapshot(&cli.root, cli.json, cli.quiet)
}

fn cmd_snapshot(root: &Path, json: bool, quiet: bool) -> Result<()> {
    let options = SnapshotOptions {
        root: root.to_path_buf(),
        output: PathBuf::from(OUTPUT_FILE_NAME),
    };
    let policy = SelectionPolicy::default();

    if !json && !quiet {
        println!("📦 Codepack");
        println!("Root: {}", options.root.display());
    }

    let report = write_snapshot(&options, &policy, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            match event {
                SnapshotEvent::Started { .. } => {
                    if !quiet {
                        println!("Generating '{}'...", OUTPUT_FILE_NAME);
                    }
                }
                SnapshotEvent::FileAdded { path } => {
                    if !quiet {
                        println!(" -> Adding: {}", path);
                    }
                }
                SnapshotEvent::FileFailed { path, reason } => {
                    eprintln!("⚠ Could not read {}: {}", path, reason);
                }
                SnapshotEvent::Completed { .. } => {}
            }
        }
    })
    .with_context(|| format!("snapshot of '{}' failed", root.display()))?;

    if !json {
        println!();
        if report.is_success() {
            println!(
                "✅ Success! All code saved to '{}' ({} files).",
                OUTPUT_FILE_NAME,
                report.files_processed()
            );
        } else {
            println!(
                "⚠ Saved '{}' with {} unreadable files ({} written).",
                OUTPUT_FILE_NAME,
                report.failed.len(),
                report.added.len()
            );
        }
    }

    Ok(())
}
