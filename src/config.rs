// Command-line configuration for the annotator

use crate::annotate::LayoutMode;
use clap::Parser;
use std::path::PathBuf;

/// Overlay syllable stress markers on typed or pasted text.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "stressmark", version)]
pub struct Config {
    /// JSON dictionary mapping words to stress codes, replacing the built-in one
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Start with one glyph row per line instead of glyphs above each word
    #[arg(long)]
    pub line_aligned: bool,

    /// Write logs here; the filter comes from RUST_LOG (default `info`)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Text file to load into the editor on startup
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

impl Config {
    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from_word_aligned(!self.line_aligned)
    }
}
