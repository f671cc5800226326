use core::fmt::Write;

use crate::paint::Color;
use crate::render::PixelGrid;

use super::ColorDepth;

const SGR_PREFIX: &str = "\x1b[";
const SGR_SUFFIX: char = 'm';
const SGR_RESET: &str = "\x1b[0m";

pub const UPPER_HALF: char = '\u{2580}'; // ▀
pub const LOWER_HALF: char = '\u{2584}'; // ▄
pub const FULL_BLOCK: char = '\u{2588}'; // █
pub const BLANK: char = ' ';

/// Luminance above which a pixel counts as lit in monochrome output.
pub const BRIGHT_THRESHOLD: u8 = 128;

// Constants for 256-color palette indexing
const COLOR_CUBE_OFFSET: u8 = 16;
const COLOR_CUBE_SIZE: u8 = 6;
const COLOR_CUBE_STEP: u16 = 51; // 255 / (COLOR_CUBE_SIZE - 1)

/// Maps a color onto the 6×6×6 cube of the 256-color palette.
///
/// Each channel snaps to the nearest of 0, 51, 102, 153, 204, 255.
#[inline]
pub fn palette_index(color: Color) -> u8 {
    // 51 is odd, so round-half never comes up for integer channels.
    let q = |c: u8| ((c as u16 + COLOR_CUBE_STEP / 2) / COLOR_CUBE_STEP) as u8;
    COLOR_CUBE_OFFSET
        + COLOR_CUBE_SIZE * COLOR_CUBE_SIZE * q(color.r)
        + COLOR_CUBE_SIZE * q(color.g)
        + q(color.b)
}

/// Glyph for an upper/lower pixel pair in monochrome output.
#[inline]
pub fn mono_glyph(upper: Color, lower: Color) -> char {
    let up = upper.luminance() > BRIGHT_THRESHOLD;
    let down = lower.luminance() > BRIGHT_THRESHOLD;
    match (up, down) {
        (true, true) => FULL_BLOCK,
        (true, false) => UPPER_HALF,
        (false, true) => LOWER_HALF,
        (false, false) => BLANK,
    }
}

/// Appends one cell: foreground = upper pixel, background = lower pixel.
fn push_cell(out: &mut String, upper: Color, lower: Color, depth: ColorDepth) {
    // Writing to a String cannot fail.
    let _ = match depth {
        ColorDepth::Full => write!(
            out,
            "{SGR_PREFIX}38;2;{};{};{}{SGR_SUFFIX}{SGR_PREFIX}48;2;{};{};{}{SGR_SUFFIX}{UPPER_HALF}",
            upper.r, upper.g, upper.b, lower.r, lower.g, lower.b
        ),
        ColorDepth::Quantized256 => write!(
            out,
            "{SGR_PREFIX}38;5;{}{SGR_SUFFIX}{SGR_PREFIX}48;5;{}{SGR_SUFFIX}{UPPER_HALF}",
            palette_index(upper),
            palette_index(lower)
        ),
        ColorDepth::Monochrome => {
            out.push(mono_glyph(upper, lower));
            Ok(())
        }
    };
}

/// Encodes the grid as terminal text.
///
/// Row `2k` is the upper half and row `2k + 1` the lower half of output
/// line `k`. Colored lines end with a reset; lines are joined by `\n` with
/// no trailing newline.
pub fn encode(grid: &PixelGrid, depth: ColorDepth) -> String {
    let lines = grid.height() / 2;
    let mut out = String::with_capacity(estimated_len(grid.width(), lines, depth));

    for k in 0..lines {
        if k > 0 {
            out.push('\n');
        }
        let upper = grid.row(2 * k);
        let lower = grid.row(2 * k + 1);
        for (&u, &l) in upper.iter().zip(lower) {
            push_cell(&mut out, u, l, depth);
        }
        if depth != ColorDepth::Monochrome {
            out.push_str(SGR_RESET);
        }
    }
    out
}

fn estimated_len(width: u32, lines: u32, depth: ColorDepth) -> usize {
    let per_cell = match depth {
        ColorDepth::Full => 42,
        ColorDepth::Quantized256 => 25,
        ColorDepth::Monochrome => 3,
    };
    (width as usize * per_cell + SGR_RESET.len() + 1) * lines as usize
}
