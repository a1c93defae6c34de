//! Stress-code resolution for a single word.
//!
//! A word either carries its own code after a backslash (`water\'_`) or is
//! looked up in the [`StressTable`] after normalization.

use super::table::StressTable;

/// Separates a word from an inline stress-code override.
pub const OVERRIDE_DELIMITER: char = '\\';

/// Returned for words missing from the table. `X` is not a stress char, so it
/// renders as a single unknown glyph.
pub const UNKNOWN_CODE: &str = "X";

/// Characters removed before dictionary lookup.
///
/// U+2014 is the em-dash; apostrophes and question marks are kept.
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')', '\u{2014}',
];

/// Lower-case `word` and strip lookup punctuation.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Resolve the stress code for a raw word token.
///
/// Order: inline override, then table lookup, then [`UNKNOWN_CODE`].
/// Never fails; an empty word yields an empty code.
pub fn resolve<'a>(word: &'a str, table: &'a StressTable) -> &'a str {
    if word.is_empty() {
        return "";
    }

    // The code runs up to the next backslash, if any
    if let Some((_, rest)) = word.split_once(OVERRIDE_DELIMITER) {
        return rest.split(OVERRIDE_DELIMITER).next().unwrap_or("");
    }

    table.get(&normalize(word)).unwrap_or(UNKNOWN_CODE)
}

/// The part of `word` shown to the user: everything before the first
/// backslash, or the whole word when there is no override.
pub fn display_text(word: &str) -> &str {
    match word.split_once(OVERRIDE_DELIMITER) {
        Some((base, _)) => base,
        None => word,
    }
}
