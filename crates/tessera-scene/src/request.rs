use tessera_engine::coords::Canvas;
use tessera_engine::encode::ColorDepth;
use tessera_engine::paint::Background;
use tessera_engine::scene::Shape;
use tessera_engine::{RenderConfig, render_with};

/// A validated render request, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub canvas: Canvas,
    pub background: Background,
    /// Shapes in paint order.
    pub shapes: Vec<Shape>,
    /// `None` when the request did not name a depth.
    pub color_depth: Option<ColorDepth>,
}

impl RenderRequest {
    /// Requested depth, falling back to full color.
    #[inline]
    pub fn depth(&self) -> ColorDepth {
        self.color_depth.unwrap_or_default()
    }

    /// Renders at the requested depth.
    pub fn render(&self, config: &RenderConfig) -> String {
        self.render_at(config, self.depth())
    }

    /// Renders at an explicit depth, ignoring the requested one.
    pub fn render_at(&self, config: &RenderConfig, depth: ColorDepth) -> String {
        render_with(config, self.canvas, &self.background, &self.shapes, depth)
    }
}
