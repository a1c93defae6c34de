//! End-to-end checks of the text -> glyph pipeline against the built-in dictionary

use stressmark::annotate::{annotate, compose, CellContent, LayoutMode, RowKind};
use stressmark::stress::{display_text, render_stress_code, resolve, Glyph, StressTable};

fn builtin() -> StressTable {
    StressTable::builtin().unwrap()
}

#[test]
fn test_cimorene_override_example() {
    let table = builtin();
    let word = "Cimorene\\'_`";

    assert_eq!(display_text(word), "Cimorene");
    assert_eq!(resolve(word, &table), "'_`");

    let glyphs: Vec<Glyph> = render_stress_code(resolve(word, &table)).collect();
    assert_eq!(
        glyphs,
        vec![Glyph::Primary, Glyph::Unstressed, Glyph::Secondary]
    );
}

#[test]
fn test_unknown_word_renders_one_warning_glyph() {
    let table = builtin();
    assert_eq!(table.get("hello"), None);
    assert_eq!(resolve("Hello!", &table), "X");

    let glyphs: Vec<Glyph> = render_stress_code(resolve("Hello!", &table)).collect();
    assert_eq!(glyphs, vec![Glyph::Unknown]);
}

#[test]
fn test_empty_word_renders_nothing() {
    let table = builtin();
    assert_eq!(resolve("", &table), "");
    assert_eq!(render_stress_code("").count(), 0);
}

#[test]
fn test_every_builtin_key_round_trips() {
    let table = builtin();
    for (key, code) in table.iter() {
        assert_eq!(resolve(key, &table), code, "key {:?}", key);
    }
}

#[test]
fn test_mixed_poem_resolution() {
    let table = builtin();
    let lines = annotate(
        "The river, under moonlight\u{2014}\nCimorene\\'_` said: Hello!",
        &table,
    );

    let codes: Vec<Vec<&str>> = lines
        .iter()
        .map(|l| l.words.iter().map(|w| w.code.as_str()).collect())
        .collect();
    assert_eq!(
        codes,
        vec![vec!["_", "'_", "'_", "X"], vec!["'_`", "'", "X"]]
    );
}

#[test]
fn test_toggling_layout_changes_only_arrangement() {
    let table = builtin();
    let lines = annotate("Once upon a time\nthere was a wizard\\'_", &table);

    let word_rows = compose(&lines, LayoutMode::WordAligned, 12);
    let line_rows = compose(&lines, LayoutMode::LineAligned, 12);

    let collect = |rows: &[stressmark::annotate::LayoutRow]| {
        let mut glyphs = Vec::new();
        let mut texts = Vec::new();
        for row in rows {
            for cell in &row.cells {
                match &cell.content {
                    CellContent::Glyphs(g) => glyphs.push(g.clone()),
                    CellContent::Text(t) => texts.push(t.clone()),
                }
            }
        }
        (glyphs, texts)
    };

    assert_eq!(collect(&word_rows), collect(&line_rows));
    // Narrow width wraps word-aligned rows but never line-aligned ones
    assert!(word_rows.len() > line_rows.len());
    assert_eq!(
        line_rows.iter().filter(|r| r.kind == RowKind::Glyphs).count(),
        2
    );
}
