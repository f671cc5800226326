use crate::coords::{Aabb, Canvas};
use crate::scene::Shape;

use super::RenderConfig;

/// A shape plus everything the compositor needs that does not vary per pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PreparedShape {
    pub shape: Shape,
    /// Conservative region of influence (fill, AA band and outward stroke).
    pub bounds: Aabb,
    pub stroke_width_world: f32,
    /// Signed-distance interval covered by the stroke.
    pub band: (f32, f32),
}

/// Per-render precomputation: pixel-center coordinates and shape bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub canvas: Canvas,
    pub world_units_per_pixel: f32,
    /// Anti-aliasing band width in world units.
    pub aa_region: f32,
    /// World X of every column's pixel center.
    pub xs: Vec<f32>,
    /// World Y of every row's pixel center.
    pub ys: Vec<f32>,
    pub shapes: Vec<PreparedShape>,
}

impl Prepared {
    pub fn new(canvas: Canvas, shapes: &[Shape], config: &RenderConfig) -> Self {
        let world_units_per_pixel = canvas.world_units_per_pixel();
        // Negative, infinite or NaN widths fall back to hard edges.
        let aa_px = if config.aa_region_px.is_finite() {
            config.aa_region_px.max(0.0)
        } else {
            0.0
        };
        let aa_region = aa_px * world_units_per_pixel;

        let shapes = shapes
            .iter()
            .map(|shape| prepare_shape(shape, world_units_per_pixel, aa_region))
            .collect();

        Self {
            canvas,
            world_units_per_pixel,
            aa_region,
            xs: canvas.column_centers(),
            ys: canvas.row_centers(),
            shapes,
        }
    }
}

fn prepare_shape(shape: &Shape, world_units_per_pixel: f32, aa_region: f32) -> PreparedShape {
    let stroke_width_world = shape.stroke.width_px.max(0.0) * world_units_per_pixel;
    let expand = aa_region + shape.stroke.position.outward_extent(stroke_width_world);
    let bounds = shape.kind.bounds(shape.position, shape.size, expand);

    log::trace!(
        "prepared {} size {} at ({}, {}): bounds {:?}",
        shape.kind.as_str(),
        shape.size,
        shape.position.x,
        shape.position.y,
        bounds
    );

    PreparedShape {
        shape: *shape,
        bounds,
        stroke_width_world,
        band: shape.stroke.position.band(stroke_width_world),
    }
}
