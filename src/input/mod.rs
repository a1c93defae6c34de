use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Nothing to annotate in {0}")]
    Empty(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Dictionary error: {0}")]
    Dictionary(String),
}

/// Text pulled in from outside the editor, ready to replace the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub text: String,
    /// Human-readable origin, e.g. `file:notes.txt` or `clipboard`.
    pub source: String,
}

pub mod clipboard;
pub mod file;
