use std::path::PathBuf;

pub mod discover;
pub mod sanitize;

/// Extension matched by discovery, without the leading dot.
pub const NOTEBOOK_EXT: &str = "ipynb";

/// How a single file ended its run. Every discovered file lands in exactly
/// one of these; nothing fails silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Keys were found and the file was rewritten on disk.
    Cleaned,
    /// No keys found; the file was not rewritten, not even byte-identically.
    Untouched,
    /// Parse or write failure, isolated to this file.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Aggregate outcome of one batch run over a directory tree.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub scanned: usize,
    pub cleaned: usize,
    pub reports: Vec<FileReport>,
}

impl BatchReport {
    pub fn record(&mut self, path: PathBuf, status: FileStatus) {
        self.scanned += 1;
        if status == FileStatus::Cleaned {
            self.cleaned += 1;
        }
        self.reports.push(FileReport { path, status });
    }
}
