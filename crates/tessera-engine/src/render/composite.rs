use crate::coords::Vec2;
use crate::paint::{Background, Color, Premul};

use super::grid::PixelGrid;
use super::prepare::Prepared;
use super::shapes::{fill_alpha, stroke_alpha};

/// Rasterizes a prepared scene into a fresh pixel grid.
///
/// Background first, then every shape in paint order, per pixel.
pub fn rasterize(prepared: &Prepared, background: &Background, culling: bool) -> PixelGrid {
    let mut grid = PixelGrid::new(prepared.canvas);
    paint_background(&mut grid, background);

    if prepared.shapes.is_empty() {
        return grid;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::iter::{IndexedParallelIterator, ParallelIterator};
        grid.par_rows_mut()
            .enumerate()
            .for_each(|(y, row)| composite_row(prepared, culling, y as u32, row));
    }

    #[cfg(not(feature = "parallel"))]
    for (y, row) in grid.rows_mut().enumerate() {
        composite_row(prepared, culling, y as u32, row);
    }

    grid
}

/// Fills the grid with the background pattern.
pub fn paint_background(grid: &mut PixelGrid, background: &Background) {
    for (y, row) in grid.rows_mut().enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = background.sample(x as u32, y as u32);
        }
    }
}

fn composite_row(prepared: &Prepared, culling: bool, y: u32, row: &mut [Color]) {
    for (x, px) in row.iter_mut().enumerate() {
        *px = composite_pixel(prepared, culling, x as u32, y, *px);
    }
}

/// Composites every shape over `existing` at pixel `(x, y)`, in paint order.
pub fn composite_pixel(
    prepared: &Prepared,
    culling: bool,
    x: u32,
    y: u32,
    existing: Color,
) -> Color {
    let px = prepared.xs[x as usize];
    let py = prepared.ys[y as usize];
    let aa = prepared.aa_region;

    let mut color = existing;
    for prep in &prepared.shapes {
        if culling && !prep.bounds.contains_xy(px, py) {
            continue;
        }

        let shape = &prep.shape;
        let local = Vec2::new(px - shape.position.x, py - shape.position.y);
        let d = shape.kind.distance(local, shape.size);

        let fill_a = fill_alpha(d, aa);
        let stroke_a = if shape.stroke.is_visible() {
            stroke_alpha(d, prep.band, aa)
        } else {
            0.0
        };
        if fill_a <= 0.0 && stroke_a <= 0.0 {
            continue;
        }

        // Stroke sits on top of the shape's own fill.
        let fill = Premul::from_color(shape.fill_at(x, y), fill_a);
        let stroke = Premul::from_color(shape.stroke.color, stroke_a);
        let Some((rgb, alpha)) = stroke.over(fill).unpremultiply() else {
            continue;
        };

        color = color.blend(rgb, alpha);
    }
    color
}
