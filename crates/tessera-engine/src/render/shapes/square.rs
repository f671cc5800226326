use crate::coords::{Aabb, Vec2};

/// Signed distance from `p` (relative to the center) to an axis-aligned
/// square with half-size `half`.
///
/// Outside: Euclidean norm of the per-axis excess. Inside: negative distance
/// to the nearer edge.
#[inline]
pub(crate) fn distance(p: Vec2, half: f32) -> f32 {
    let d = p.abs() - Vec2::new(half, half);
    let outside = d.max(Vec2::zero()).length();
    let inside = d.x.max(d.y).min(0.0);
    outside + inside
}

#[inline]
pub(crate) fn bounds(center: Vec2, half: f32, expand: f32) -> Aabb {
    Aabb::around(center, half + expand.max(0.0))
}
