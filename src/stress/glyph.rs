/// One rendered syllable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Unstressed,
    Primary,
    Secondary,
    /// Any char outside the stress-code alphabet, including the `X` marker.
    Unknown,
}

impl Glyph {
    pub fn from_char(c: char) -> Self {
        match c {
            '_' => Glyph::Unstressed,
            '\'' => Glyph::Primary,
            '`' => Glyph::Secondary,
            _ => Glyph::Unknown,
        }
    }

    /// Single-cell terminal symbol.
    pub fn symbol(self) -> char {
        match self {
            Glyph::Unstressed => '─',
            Glyph::Primary => '▲',
            Glyph::Secondary => '▼',
            Glyph::Unknown => '✕',
        }
    }
}

/// Glyphs for each char of `code`, in order.
///
/// Pure: calling it again, or cloning the iterator, replays the same sequence.
pub fn render_stress_code(code: &str) -> impl Iterator<Item = Glyph> + Clone + '_ {
    code.chars().map(Glyph::from_char)
}

/// Glyph symbols separated by single spaces, as drawn above a word.
pub fn glyph_strip(code: &str) -> String {
    let mut strip = String::new();
    for (i, glyph) in render_stress_code(code).enumerate() {
        if i > 0 {
            strip.push(' ');
        }
        strip.push(glyph.symbol());
    }
    strip
}
