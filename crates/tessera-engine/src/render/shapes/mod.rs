//! Signed distance functions and bounds estimators, one module per kind.
//!
//! Conventions:
//! - points are relative to the shape position, in world units, +Y down
//! - distance is negative inside, zero on the boundary, positive outside
//! - distances are exact or conservative (Lipschitz ≤ 1), so a fixed-width
//!   AA band looks the same on every edge orientation
//! - `bounds(.., expand)` contains every point where `|distance| <= expand`;
//!   it may be loose but never tight

mod circle;
mod common;
mod square;
mod triangle;

pub use common::{fill_alpha, stroke_alpha};

use crate::coords::{Aabb, Vec2};
use crate::scene::ShapeKind;

impl ShapeKind {
    /// Signed distance from `p` (relative to the shape center) to the
    /// boundary of a shape of this kind with the given `size`.
    #[inline]
    pub fn distance(self, p: Vec2, size: f32) -> f32 {
        match self {
            ShapeKind::Circle => circle::distance(p, size),
            ShapeKind::Square => square::distance(p, size),
            ShapeKind::Triangle => triangle::distance(p, size),
        }
    }

    /// World-space box guaranteed to contain every point within `expand`
    /// of the boundary.
    #[inline]
    pub fn bounds(self, center: Vec2, size: f32, expand: f32) -> Aabb {
        match self {
            ShapeKind::Circle => circle::bounds(center, size, expand),
            ShapeKind::Square => square::bounds(center, size, expand),
            ShapeKind::Triangle => triangle::bounds(center, size, expand),
        }
    }
}
