// Annotation pipeline: text -> lines -> words -> resolved stress codes

pub mod layout;

pub use layout::{
    compose, line_rows, scroll_to_line, CellContent, LayoutCell, LayoutMode, LayoutRow, RowKind,
};

use crate::stress::{display_text, render_stress_code, resolve, Glyph, StressTable};

/// A word token together with its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedWord {
    /// The token exactly as typed, override suffix included.
    pub raw: String,
    pub display: String,
    pub code: String,
}

impl AnnotatedWord {
    pub fn new(raw: &str, table: &StressTable) -> Self {
        Self {
            raw: raw.to_string(),
            display: display_text(raw).to_string(),
            code: resolve(raw, table).to_string(),
        }
    }

    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + Clone + '_ {
        render_stress_code(&self.code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedLine {
    pub words: Vec<AnnotatedWord>,
}

/// Split `text` into lines and words and resolve every word.
///
/// Lines split on `\n` (a trailing `\r` is dropped); words split on single
/// spaces, so consecutive spaces yield empty words with empty codes.
pub fn annotate(text: &str, table: &StressTable) -> Vec<AnnotatedLine> {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            AnnotatedLine {
                words: line
                    .split(' ')
                    .map(|word| AnnotatedWord::new(word, table))
                    .collect(),
            }
        })
        .collect()
}
