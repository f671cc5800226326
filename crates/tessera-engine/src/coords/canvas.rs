/// Number of world units spanned by the smaller canvas dimension.
pub const WORLD_SPAN: f32 = 10.0;

pub const MAX_WIDTH: u32 = 120;
pub const MIN_HEIGHT: u32 = 2;
pub const MAX_HEIGHT: u32 = 64;

/// Pixel dimensions of the render target.
///
/// Each output character cell covers two pixel rows, so `height` is expected
/// to be even. World space is scaled so the smaller of the two dimensions
/// always spans [`WORLD_SPAN`] units; the larger one spans
/// `WORLD_SPAN × aspect`. Origin is the canvas center, +X right, +Y down.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are inside the supported range and the
    /// height is even.
    #[inline]
    pub fn is_valid(self) -> bool {
        (1..=MAX_WIDTH).contains(&self.width)
            && (MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height)
            && self.height % 2 == 0
    }

    /// Number of character rows produced by the encoder.
    #[inline]
    pub fn rows(self) -> u32 {
        self.height / 2
    }

    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn world_units_per_pixel(self) -> f32 {
        WORLD_SPAN / self.width.min(self.height).max(1) as f32
    }

    #[inline]
    pub fn world_width(self) -> f32 {
        self.width as f32 * self.world_units_per_pixel()
    }

    #[inline]
    pub fn world_height(self) -> f32 {
        self.height as f32 * self.world_units_per_pixel()
    }

    /// World X coordinate of every column's pixel center.
    pub fn column_centers(self) -> Vec<f32> {
        let extent = self.world_width();
        (0..self.width).map(|i| world_coord(i, self.width, extent)).collect()
    }

    /// World Y coordinate of every row's pixel center.
    pub fn row_centers(self) -> Vec<f32> {
        let extent = self.world_height();
        (0..self.height).map(|i| world_coord(i, self.height, extent)).collect()
    }
}

/// Maps pixel index `i` of `count` onto a centered axis of length `extent`.
#[inline]
pub fn world_coord(i: u32, count: u32, extent: f32) -> f32 {
    ((i as f32 + 0.5) / count as f32 - 0.5) * extent
}
