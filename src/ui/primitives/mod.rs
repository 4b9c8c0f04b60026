pub mod glyph;
pub mod text;
