use crate::commands::NOTEBOOK_EXT;
use crate::error::{Result, ScrubError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerate every notebook under `root`, recursively, in traversal order.
/// A missing or unreadable root is fatal and propagated to the caller.
pub fn run(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ScrubError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == NOTEBOOK_EXT)
        {
            found.push(entry.path().to_path_buf());
        }
    }
    Ok(found)
}
