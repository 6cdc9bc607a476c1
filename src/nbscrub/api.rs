//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! nbscrub operations. It dispatches to commands and returns structured
//! results; printing and exit codes belong to the CLI client.
//!
//! The batch [`ScrubApi::run`] is also the system's one failure-isolation
//! boundary: a file that fails to parse or write is reported and skipped,
//! never allowed to stop the rest of the batch. Discovery failures, by
//! contrast, are fatal — there is nothing sensible to continue with.

use crate::commands::{self, BatchReport, FileStatus};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// The main API facade for nbscrub operations, rooted at one directory.
pub struct ScrubApi {
    root: PathBuf,
}

impl ScrubApi {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All notebooks under the root, in traversal order.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        commands::discover::run(&self.root)
    }

    /// Sanitize a single notebook; `true` means it was rewritten.
    pub fn sanitize(&self, path: &Path) -> Result<bool> {
        commands::sanitize::run(path)
    }

    /// Sanitize every notebook under the root. Per-file failures become
    /// `FileStatus::Failed` entries and the batch carries on.
    pub fn run(&self) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        for path in self.discover()? {
            let status = match commands::sanitize::run(&path) {
                Ok(true) => FileStatus::Cleaned,
                Ok(false) => FileStatus::Untouched,
                Err(e) => FileStatus::Failed(e.to_string()),
            };
            report.record(path, status);
        }
        Ok(report)
    }
}
