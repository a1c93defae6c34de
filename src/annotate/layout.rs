//! Arranges annotated lines into rows of positioned cells.
//!
//! The output is independent of the terminal backend: [`crate::ui`] turns
//! each [`LayoutRow`] into a styled line. Composing never re-resolves a word,
//! so switching [`LayoutMode`] only changes where cells land.

use super::AnnotatedLine;
use crate::stress::{glyph_strip, Glyph};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Horizontal gap between neighbouring words, in cells.
pub const WORD_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Glyphs stacked directly above each word; words wrap at the width.
    #[default]
    WordAligned,
    /// One glyph row and one text row per input line, centred on each other.
    LineAligned,
}

impl LayoutMode {
    pub fn from_word_aligned(word_aligned: bool) -> Self {
        if word_aligned {
            LayoutMode::WordAligned
        } else {
            LayoutMode::LineAligned
        }
    }

    pub fn is_word_aligned(self) -> bool {
        self == LayoutMode::WordAligned
    }

    pub fn toggled(self) -> Self {
        Self::from_word_aligned(!self.is_word_aligned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Glyphs,
    Text,
    /// Blank row between two input lines.
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Glyphs(Vec<Glyph>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCell {
    /// Starting column, in terminal cells.
    pub column: usize,
    pub width: usize,
    pub content: CellContent,
    /// Index of the word within its input line.
    pub word_index: usize,
}

impl LayoutCell {
    /// The cell as it is drawn, without styling.
    pub fn plain(&self) -> String {
        match &self.content {
            CellContent::Glyphs(glyphs) => {
                let symbols: Vec<String> = glyphs.iter().map(|g| g.symbol().to_string()).collect();
                symbols.join(" ")
            }
            CellContent::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub kind: RowKind,
    /// Input line this row belongs to; a spacer belongs to the line below it.
    pub line: usize,
    pub cells: Vec<LayoutCell>,
}

impl LayoutRow {
    fn new(kind: RowKind, line: usize) -> Self {
        Self {
            kind,
            line,
            cells: Vec::new(),
        }
    }

    /// The row as plain text, cells padded to their columns.
    pub fn plain(&self) -> String {
        let mut out = String::new();
        let mut cursor = 0;
        for cell in &self.cells {
            if cell.column > cursor {
                out.push_str(&" ".repeat(cell.column - cursor));
                cursor = cell.column;
            }
            out.push_str(&cell.plain());
            cursor += cell.width;
        }
        out.trim_end().to_string()
    }
}

struct Measured {
    glyphs: Vec<Glyph>,
    glyph_width: usize,
    text: String,
    text_width: usize,
}

fn measure(line: &AnnotatedLine) -> Vec<Measured> {
    line.words
        .iter()
        .map(|word| Measured {
            glyphs: word.glyphs().collect(),
            glyph_width: glyph_strip(&word.code).width(),
            text: word.display.clone(),
            text_width: word.display.width(),
        })
        .collect()
}

/// Arrange `lines` for a container `width` cells wide.
pub fn compose(lines: &[AnnotatedLine], mode: LayoutMode, width: usize) -> Vec<LayoutRow> {
    let mut rows = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            rows.push(LayoutRow::new(RowKind::Spacer, i));
        }
        match mode {
            LayoutMode::WordAligned => compose_word_aligned(line, i, width, &mut rows),
            LayoutMode::LineAligned => compose_line_aligned(line, i, &mut rows),
        }
    }
    rows
}

/// Rows drawn for input line `line`, its leading spacer excluded.
pub fn line_rows(rows: &[LayoutRow], line: usize) -> Option<Range<usize>> {
    let start = rows
        .iter()
        .position(|r| r.line == line && r.kind != RowKind::Spacer)?;
    let end = rows.iter().rposition(|r| r.line == line)? + 1;
    Some(start..end)
}

/// First row to show in a viewport `height` rows tall so that input line
/// `line` is visible. A line taller than the viewport is shown from its top.
pub fn scroll_to_line(rows: &[LayoutRow], line: usize, height: usize) -> usize {
    match line_rows(rows, line) {
        Some(span) => span.end.saturating_sub(height).min(span.start),
        None => 0,
    }
}

fn compose_word_aligned(
    line: &AnnotatedLine,
    line_index: usize,
    width: usize,
    rows: &mut Vec<LayoutRow>,
) {
    let mut glyph_row = LayoutRow::new(RowKind::Glyphs, line_index);
    let mut text_row = LayoutRow::new(RowKind::Text, line_index);
    let mut column = 0;

    for (index, word) in measure(line).into_iter().enumerate() {
        let column_width = word.glyph_width.max(word.text_width);

        if column > 0 && column + column_width > width {
            rows.push(std::mem::replace(
                &mut glyph_row,
                LayoutRow::new(RowKind::Glyphs, line_index),
            ));
            rows.push(std::mem::replace(
                &mut text_row,
                LayoutRow::new(RowKind::Text, line_index),
            ));
            column = 0;
        }

        // Centre the narrower of the two within the word's column
        glyph_row.cells.push(LayoutCell {
            column: column + (column_width - word.glyph_width) / 2,
            width: word.glyph_width,
            content: CellContent::Glyphs(word.glyphs),
            word_index: index,
        });
        text_row.cells.push(LayoutCell {
            column: column + (column_width - word.text_width) / 2,
            width: word.text_width,
            content: CellContent::Text(word.text),
            word_index: index,
        });

        column += column_width + WORD_GAP;
    }

    rows.push(glyph_row);
    rows.push(text_row);
}

fn compose_line_aligned(line: &AnnotatedLine, line_index: usize, rows: &mut Vec<LayoutRow>) {
    let mut glyph_row = LayoutRow::new(RowKind::Glyphs, line_index);
    let mut text_row = LayoutRow::new(RowKind::Text, line_index);
    let mut glyph_column = 0;
    let mut text_column = 0;

    for (index, word) in measure(line).into_iter().enumerate() {
        glyph_row.cells.push(LayoutCell {
            column: glyph_column,
            width: word.glyph_width,
            content: CellContent::Glyphs(word.glyphs),
            word_index: index,
        });
        glyph_column += word.glyph_width + WORD_GAP;

        text_row.cells.push(LayoutCell {
            column: text_column,
            width: word.text_width,
            content: CellContent::Text(word.text),
            word_index: index,
        });
        text_column += word.text_width + WORD_GAP;
    }

    // Centre the narrower row under the wider one
    let glyph_width = glyph_column.saturating_sub(WORD_GAP);
    let text_width = text_column.saturating_sub(WORD_GAP);
    let row_width = glyph_width.max(text_width);
    shift(&mut glyph_row, (row_width - glyph_width) / 2);
    shift(&mut text_row, (row_width - text_width) / 2);

    rows.push(glyph_row);
    rows.push(text_row);
}

fn shift(row: &mut LayoutRow, offset: usize) {
    for cell in &mut row.cells {
        cell.column += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;
    use crate::stress::StressTable;

    fn table() -> StressTable {
        StressTable::from_entries([("water", "'_"), ("is", "'"), ("wet", "'")])
    }

    fn plain(rows: &[LayoutRow]) -> Vec<String> {
        rows.iter().map(LayoutRow::plain).collect()
    }

    #[test]
    fn test_layout_mode_toggle() {
        assert_eq!(LayoutMode::default(), LayoutMode::WordAligned);
        assert_eq!(LayoutMode::WordAligned.toggled(), LayoutMode::LineAligned);
        assert_eq!(LayoutMode::LineAligned.toggled(), LayoutMode::WordAligned);
        assert_eq!(LayoutMode::from_word_aligned(false), LayoutMode::LineAligned);
    }

    #[test]
    fn test_word_aligned_stacks_glyphs_over_word() {
        let lines = annotate("Cimorene\\'_`", &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 80);
        assert_eq!(plain(&rows), vec![" ▲ ─ ▼".to_string(), "Cimorene".to_string()]);
    }

    #[test]
    fn test_word_aligned_columns_share_start() {
        let lines = annotate("water is wet", &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 80);
        assert_eq!(rows.len(), 2);
        // "water" is 5 wide, so "is" starts at 5 + gap
        assert_eq!(rows[1].cells[1].column, 7);
        assert_eq!(rows[0].cells[1].column, 7);
    }

    #[test]
    fn test_word_aligned_wraps_at_width() {
        let lines = annotate("water is wet", &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 10);
        // "water  is" fits in 9, "wet" wraps
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].kind, RowKind::Glyphs);
        assert_eq!(rows[3].cells[0].column, 0);
        assert_eq!(rows[3].cells[0].content, CellContent::Text("wet".to_string()));
    }

    #[test]
    fn test_word_aligned_zero_width_puts_one_word_per_row() {
        let lines = annotate("water is", &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 0);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_line_aligned_centres_rows_on_each_other() {
        let lines = annotate("water is", &table());
        let rows = compose(&lines, LayoutMode::LineAligned, 80);
        // glyph row is 6 wide, text row 9
        assert_eq!(plain(&rows), vec![" ▲ ─  ▲".to_string(), "water  is".to_string()]);
    }

    #[test]
    fn test_line_aligned_wider_glyph_row_shifts_text() {
        let lines = annotate("a\'_'_", &table());
        let rows = compose(&lines, LayoutMode::LineAligned, 80);
        assert_eq!(plain(&rows), vec!["▲ ─ ▲ ─".to_string(), "   a".to_string()]);
    }

    #[test]
    fn test_line_rows_skip_leading_spacer() {
        let lines = annotate("water\nwet", &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 80);
        assert_eq!(line_rows(&rows, 0), Some(0..2));
        assert_eq!(line_rows(&rows, 1), Some(3..5));
        assert_eq!(line_rows(&rows, 2), None);
    }

    #[test]
    fn test_scroll_keeps_cursor_line_visible() {
        let text = vec!["water"; 20].join("\n");
        let lines = annotate(&text, &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 80);
        assert_eq!(rows.len(), 59);

        // Early lines need no scrolling
        assert_eq!(scroll_to_line(&rows, 0, 20), 0);
        assert_eq!(scroll_to_line(&rows, 6, 20), 0);

        // Last line: rows 57..59 must land inside the 20-row window
        let offset = scroll_to_line(&rows, 19, 20);
        assert_eq!(offset, 39);
        let span = line_rows(&rows, 19).unwrap();
        assert!(span.start >= offset && span.end <= offset + 20);
    }

    #[test]
    fn test_scroll_shows_top_of_tall_line() {
        let lines = annotate("water is wet", &table());
        let rows = compose(&lines, LayoutMode::WordAligned, 0);
        assert_eq!(rows.len(), 6);
        assert_eq!(scroll_to_line(&rows, 0, 2), 0);
    }

    #[test]
    fn test_line_aligned_does_not_wrap() {
        let lines = annotate("water is wet", &table());
        let rows = compose(&lines, LayoutMode::LineAligned, 4);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_spacer_between_lines() {
        let lines = annotate("water\nwet", &table());
        for mode in [LayoutMode::WordAligned, LayoutMode::LineAligned] {
            let rows = compose(&lines, mode, 80);
            let kinds: Vec<RowKind> = rows.iter().map(|r| r.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    RowKind::Glyphs,
                    RowKind::Text,
                    RowKind::Spacer,
                    RowKind::Glyphs,
                    RowKind::Text
                ]
            );
        }
    }

    #[test]
    fn test_modes_carry_same_cells_by_word_index() {
        let lines = annotate("Cimorene\\'_` Hello! water", &table());
        let word = compose(&lines, LayoutMode::WordAligned, 80);
        let line = compose(&lines, LayoutMode::LineAligned, 80);
        for (a, b) in word.iter().zip(line.iter()) {
            let a: Vec<_> = a.cells.iter().map(|c| (c.word_index, &c.content)).collect();
            let b: Vec<_> = b.cells.iter().map(|c| (c.word_index, &c.content)).collect();
            assert_eq!(a, b);
        }
    }
}
