use crate::coords::Vec2;
use crate::paint::{Background, Color};

use super::Shape;

/// A background plus shapes in paint order.
///
/// Painter order is insertion order: later shapes are composited over
/// earlier ones. There is no z-index; reorder the list to restack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub background: Background,
    shapes: Vec<Shape>,
}

impl Scene {
    #[inline]
    pub fn new(background: Background) -> Self {
        Self { background, shapes: Vec::new() }
    }

    /// Shapes in paint order (back-to-front).
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes all shapes. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Appends a shape on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_circle(&mut self, radius: f32, center: Vec2, color: Color) {
        self.push(Shape::circle(radius, center, color));
    }

    /// Records a solid square.
    #[inline]
    pub fn push_square(&mut self, half_size: f32, center: Vec2, color: Color) {
        self.push(Shape::square(half_size, center, color));
    }

    /// Records a solid triangle.
    #[inline]
    pub fn push_triangle(&mut self, half_side: f32, center: Vec2, color: Color) {
        self.push(Shape::triangle(half_side, center, color));
    }
}
