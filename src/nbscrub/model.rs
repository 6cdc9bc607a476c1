//! Lossless serde view of a Jupyter notebook.
//!
//! Only `cells[].source` is ever edited. Everything else — outputs, metadata,
//! execution counts, nbformat version fields — is captured in flattened maps
//! and written back exactly as it was read, so a rewrite never disturbs
//! fields this tool has no business touching.

use crate::error::{Result, ScrubError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Cell source as stored on disk: either a single string or a list of
/// line strings (both are valid nbformat encodings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Lines(Vec<String>),
    Text(String),
}

impl SourceText {
    /// The full source as one string.
    pub fn text(&self) -> String {
        match self {
            SourceText::Lines(lines) => lines.concat(),
            SourceText::Text(text) => text.clone(),
        }
    }

    /// Replace the source, keeping the on-disk shape: a list stays a list,
    /// re-split on line terminators the way nbformat models lines.
    pub fn set_text(&mut self, text: &str) {
        match self {
            SourceText::Lines(_) => {
                *self = SourceText::Lines(
                    text.split_inclusive('\n').map(str::to_string).collect(),
                );
            }
            SourceText::Text(_) => *self = SourceText::Text(text.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    pub source: SourceText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notebook {
    /// Parse a notebook from disk. A file that is not valid notebook JSON
    /// yields a `Format` error naming the path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ScrubError::Io)?;
        serde_json::from_str(&content).map_err(|source| ScrubError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize the whole notebook back to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(self).map_err(ScrubError::Serialization)?;
        content.push('\n');
        fs::write(path, content).map_err(ScrubError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_lines_concatenate() {
        let source = SourceText::Lines(vec!["a = 1\n".into(), "b = 2".into()]);
        assert_eq!(source.text(), "a = 1\nb = 2");
    }

    #[test]
    fn set_text_keeps_list_shape() {
        let mut source = SourceText::Lines(vec!["old\n".into()]);
        source.set_text("x = 1\ny = 2\n");
        assert_eq!(
            source,
            SourceText::Lines(vec!["x = 1\n".into(), "y = 2\n".into()])
        );
    }

    #[test]
    fn set_text_keeps_string_shape() {
        let mut source = SourceText::Text("old".into());
        source.set_text("new\ntext");
        assert_eq!(source, SourceText::Text("new\ntext".into()));
    }

    #[test]
    fn parses_both_source_encodings() {
        let raw = json!({
            "cells": [
                {"cell_type": "code", "source": ["a\n", "b"], "outputs": []},
                {"cell_type": "markdown", "source": "# Title"}
            ],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 5
        });
        let notebook: Notebook = serde_json::from_value(raw).unwrap();
        assert_eq!(notebook.cells[0].source.text(), "a\nb");
        assert_eq!(notebook.cells[1].source.text(), "# Title");
    }

    #[test]
    fn roundtrip_preserves_unknown_fields() {
        let raw = json!({
            "cells": [{
                "cell_type": "code",
                "source": "x = 1",
                "execution_count": 3,
                "outputs": [{"output_type": "stream", "text": "hi"}],
                "metadata": {"collapsed": true}
            }],
            "metadata": {"kernelspec": {"name": "python3"}},
            "nbformat": 4,
            "nbformat_minor": 5
        });
        let notebook: Notebook = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&notebook).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ipynb");
        fs::write(&path, "not a notebook").unwrap();

        let err = Notebook::load(&path).unwrap_err();
        match err {
            ScrubError::Format { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Format error, got {:?}", other),
        }
    }
}
