pub mod glyph;
pub mod resolve;
pub mod table;

pub use glyph::{glyph_strip, render_stress_code, Glyph};
pub use resolve::{display_text, normalize, resolve, OVERRIDE_DELIMITER, UNKNOWN_CODE};
pub use table::StressTable;
