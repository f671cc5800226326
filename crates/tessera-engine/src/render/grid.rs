use crate::coords::Canvas;
use crate::paint::Color;

/// Row-major grid of opaque pixels, owned by a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Allocates a grid for `canvas`, every pixel black.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            pixels: vec![Color::BLACK; canvas.pixel_count()],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Returns the pixel at `(x, y)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes the pixel at `(x, y)`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Pixels of row `y`, left to right.
    #[inline]
    pub fn row(&self, y: u32) -> &[Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        self.pixels.get(start..start + w).unwrap_or(&[])
    }

    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, Color> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }

    #[cfg(feature = "parallel")]
    #[inline]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, Color> {
        use rayon::slice::ParallelSliceMut;
        self.pixels.par_chunks_exact_mut(self.width.max(1) as usize)
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black() {
        let grid = PixelGrid::new(Canvas::new(3, 2));
        assert_eq!(grid.pixels().len(), 6);
        assert!(grid.pixels().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn set_get_row_major() {
        let mut grid = PixelGrid::new(Canvas::new(3, 2));
        grid.set(2, 1, Color::WHITE);
        assert_eq!(grid.get(2, 1), Some(Color::WHITE));
        assert_eq!(grid.pixels()[5], Color::WHITE);
        assert_eq!(grid.row(1)[2], Color::WHITE);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut grid = PixelGrid::new(Canvas::new(3, 2));
        grid.set(3, 0, Color::WHITE);
        assert_eq!(grid.get(3, 0), None);
        assert!(grid.row(2).is_empty());
        assert!(grid.pixels().iter().all(|&c| c == Color::BLACK));
    }
}
