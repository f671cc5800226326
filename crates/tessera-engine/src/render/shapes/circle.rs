use crate::coords::{Aabb, Vec2};

/// Signed distance from `p` (relative to the center) to a circle of `radius`.
#[inline]
pub(crate) fn distance(p: Vec2, radius: f32) -> f32 {
    p.length() - radius
}

/// Box containing every point within `expand` of the circle boundary.
#[inline]
pub(crate) fn bounds(center: Vec2, radius: f32, expand: f32) -> Aabb {
    Aabb::around(center, radius + expand.max(0.0))
}
