//! Cell encoder: folds pixel row pairs into half-block terminal cells.
//!
//! Each cell draws `▀` with the upper pixel as foreground and the lower
//! pixel as background. Monochrome output instead picks one of four glyphs
//! from the pair's brightness.

mod cell;
mod depth;

pub use cell::{
    BLANK, BRIGHT_THRESHOLD, FULL_BLOCK, LOWER_HALF, UPPER_HALF, encode, mono_glyph, palette_index,
};
pub use depth::ColorDepth;
