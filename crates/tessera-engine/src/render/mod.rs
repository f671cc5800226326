//! CPU rasterizer.
//!
//! Pipeline:
//! - `prepare`: pixel-center world coordinates and per-shape bounds
//! - `composite`: background, then every shape per pixel in paint order
//! - `encode` (crate root): pixel pairs → half-block terminal cells
//!
//! A render call owns all of its state; nothing outlives it.

mod composite;
mod config;
mod grid;
mod prepare;
pub mod shapes;

pub use composite::{composite_pixel, paint_background, rasterize};
pub use config::{DEFAULT_AA_REGION_PX, RenderConfig};
pub use grid::PixelGrid;
pub use prepare::{Prepared, PreparedShape};

use crate::coords::Canvas;
use crate::encode::{ColorDepth, encode};
use crate::paint::Background;
use crate::scene::{Scene, Shape};

/// Renders `shapes` over `background` with the default configuration.
///
/// Returns `canvas.height / 2` lines joined by `\n`, each holding
/// `canvas.width` cells.
pub fn render(
    canvas: Canvas,
    background: &Background,
    shapes: &[Shape],
    depth: ColorDepth,
) -> String {
    render_with(&RenderConfig::default(), canvas, background, shapes, depth)
}

/// Renders with an explicit configuration.
///
/// Input is expected to be validated: `canvas.is_valid()` should hold.
pub fn render_with(
    config: &RenderConfig,
    canvas: Canvas,
    background: &Background,
    shapes: &[Shape],
    depth: ColorDepth,
) -> String {
    debug_assert!(canvas.is_valid(), "render called with unsupported canvas {canvas:?}");
    log::debug!(
        "render {}x{}: {} shapes, culling {}, aa {} px, depth {:?}",
        canvas.width,
        canvas.height,
        shapes.len(),
        if config.culling { "on" } else { "off" },
        config.aa_region_px,
        depth
    );

    let grid = rasterize_with(config, canvas, background, shapes);
    encode(&grid, depth)
}

/// Renders a [`Scene`].
pub fn render_scene(
    config: &RenderConfig,
    canvas: Canvas,
    scene: &Scene,
    depth: ColorDepth,
) -> String {
    render_with(config, canvas, &scene.background, scene.shapes(), depth)
}

/// Runs the preprocessor and compositor, stopping before encoding.
pub fn rasterize_with(
    config: &RenderConfig,
    canvas: Canvas,
    background: &Background,
    shapes: &[Shape],
) -> PixelGrid {
    let prepared = Prepared::new(canvas, shapes, config);
    rasterize(&prepared, background, config.culling)
}
