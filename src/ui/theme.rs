use crate::stress::Glyph;
use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub unstressed: Color,
    pub primary: Color,
    pub secondary: Color,
    pub unknown: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7 Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            unstressed: Color::Rgb(86, 95, 137), // #565F89 Gray
            primary: Color::Rgb(187, 154, 247), // #BB9AF7 Purple
            secondary: Color::Rgb(125, 207, 255), // #7DCFFF Sky
            unknown: Color::Rgb(247, 118, 142), // #F7768E Coral Red
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }

    pub fn glyph(&self, glyph: Glyph) -> Color {
        match glyph {
            Glyph::Unstressed => self.unstressed,
            Glyph::Primary => self.primary,
            Glyph::Secondary => self.secondary,
            Glyph::Unknown => self.unknown,
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use crate::stress::Glyph;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn warning() -> Color {
        Theme::current().unknown
    }
    pub fn glyph(glyph: Glyph) -> Color {
        Theme::current().glyph(glyph)
    }
}
