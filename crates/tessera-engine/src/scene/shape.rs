use core::str::FromStr;

use crate::coords::Vec2;
use crate::paint::{Color, Pattern};

/// Supported shape kinds. Adding a kind means adding a distance function
/// and a bounds estimator under `render::shapes`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    /// Equilateral, apex up.
    Triangle,
}

impl ShapeKind {
    pub const NAMES: [&'static str; 3] = ["circle", "square", "triangle"];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            "triangle" => Ok(ShapeKind::Triangle),
            _ => Err(()),
        }
    }
}

/// Where the stroke sits relative to the shape boundary.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokePosition {
    Inside,
    #[default]
    Center,
    Outside,
}

impl StrokePosition {
    pub const NAMES: [&'static str; 3] = ["inside", "center", "outside"];

    /// How far the stroke reaches past the boundary, for a stroke `width`
    /// wide (same units as `width`).
    #[inline]
    pub fn outward_extent(self, width: f32) -> f32 {
        match self {
            StrokePosition::Inside => 0.0,
            StrokePosition::Center => width * 0.5,
            StrokePosition::Outside => width,
        }
    }

    /// Signed-distance interval `[min, max]` covered by a stroke `width` wide.
    #[inline]
    pub fn band(self, width: f32) -> (f32, f32) {
        match self {
            StrokePosition::Inside => (-width, 0.0),
            StrokePosition::Center => (-width * 0.5, width * 0.5),
            StrokePosition::Outside => (0.0, width),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrokePosition::Inside => "inside",
            StrokePosition::Center => "center",
            StrokePosition::Outside => "outside",
        }
    }
}

impl FromStr for StrokePosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(StrokePosition::Inside),
            "center" => Ok(StrokePosition::Center),
            "outside" => Ok(StrokePosition::Outside),
            _ => Err(()),
        }
    }
}

/// Stroke drawn along a shape boundary.
///
/// `width_px` is in screen pixels, not world units, so strokes keep the same
/// visual weight at every canvas resolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub position: StrokePosition,
    pub width_px: f32,
}

impl Stroke {
    pub const MAX_WIDTH_PX: f32 = 10.0;

    #[inline]
    pub fn new(color: Color, position: StrokePosition, width_px: f32) -> Self {
        Self { color, position, width_px }
    }

    /// Zero-width stroke; contributes nothing.
    #[inline]
    pub fn none() -> Self {
        Self::new(Color::BLACK, StrokePosition::Center, 0.0)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width_px > 0.0
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::none()
    }
}

/// A single shape in world space.
///
/// `size` is the circle radius, the square half-size, or the triangle
/// half-side, in world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub size: f32,
    pub position: Vec2,
    pub ink: Color,
    pub paper: Color,
    pub pattern: Pattern,
    pub stroke: Stroke,
}

impl Shape {
    pub const MIN_SIZE: u32 = 1;
    pub const MAX_SIZE: u32 = 100;
    pub const MAX_COORD: i32 = 1000;

    /// Solid shape (ink == paper) with no stroke.
    #[inline]
    pub fn new(kind: ShapeKind, size: f32, position: Vec2, ink: Color) -> Self {
        Self {
            kind,
            size,
            position,
            ink,
            paper: ink,
            pattern: Pattern::Breton,
            stroke: Stroke::none(),
        }
    }

    #[inline]
    pub fn circle(size: f32, position: Vec2, ink: Color) -> Self {
        Self::new(ShapeKind::Circle, size, position, ink)
    }

    #[inline]
    pub fn square(size: f32, position: Vec2, ink: Color) -> Self {
        Self::new(ShapeKind::Square, size, position, ink)
    }

    #[inline]
    pub fn triangle(size: f32, position: Vec2, ink: Color) -> Self {
        Self::new(ShapeKind::Triangle, size, position, ink)
    }

    #[inline]
    pub fn with_paper(mut self, paper: Color) -> Self {
        self.paper = paper;
        self
    }

    #[inline]
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    #[inline]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Fill color at pixel `(x, y)`.
    #[inline]
    pub fn fill_at(&self, x: u32, y: u32) -> Color {
        self.pattern.pick(self.ink, self.paper, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_bands() {
        assert_eq!(StrokePosition::Inside.band(2.0), (-2.0, 0.0));
        assert_eq!(StrokePosition::Center.band(2.0), (-1.0, 1.0));
        assert_eq!(StrokePosition::Outside.band(2.0), (0.0, 2.0));
    }

    #[test]
    fn stroke_outward_extent() {
        assert_eq!(StrokePosition::Inside.outward_extent(4.0), 0.0);
        assert_eq!(StrokePosition::Center.outward_extent(4.0), 2.0);
        assert_eq!(StrokePosition::Outside.outward_extent(4.0), 4.0);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for name in ShapeKind::NAMES {
            assert_eq!(name.parse::<ShapeKind>().map(ShapeKind::as_str), Ok(name));
        }
        for name in StrokePosition::NAMES {
            assert_eq!(name.parse::<StrokePosition>().map(StrokePosition::as_str), Ok(name));
        }
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let s = Shape::square(2.0, Vec2::new(1.0, 1.0), Color::WHITE)
            .with_paper(Color::BLACK)
            .with_pattern(Pattern::Pinstripe);
        assert_eq!(s.kind, ShapeKind::Square);
        assert_eq!(s.fill_at(0, 0), Color::WHITE);
        assert_eq!(s.fill_at(1, 0), Color::BLACK);
        assert!(!s.stroke.is_visible());
    }
}
