use crate::coords::{Aabb, Vec2};

const SQRT_3: f32 = 1.732_050_8;

/// Half-extent multiplier for the bounds estimate. The apex sits
/// `2/√3 ≈ 1.155` half-sides from the center.
const BOUNDS_FACTOR: f32 = 1.25;

/// Signed distance from `p` (relative to the centroid, world +Y down) to an
/// equilateral triangle, apex up, with half-side `half`.
///
/// The fold-and-clamp construction works in a +Y-up frame, so only the
/// input Y is flipped; the output sign is left alone.
#[inline]
pub(crate) fn distance(p: Vec2, half: f32) -> f32 {
    distance_y_up(Vec2::new(p.x, -p.y), half)
}

fn distance_y_up(p: Vec2, half: f32) -> f32 {
    // Fold onto the right half, move the origin to the bottom-right corner.
    let mut q = Vec2::new(p.x.abs() - half, p.y + half / SQRT_3);
    // Reflect across the right edge's normal when past it.
    if q.x + SQRT_3 * q.y > 0.0 {
        q = Vec2::new(q.x - SQRT_3 * q.y, -SQRT_3 * q.x - q.y) / 2.0;
    }
    q.x -= q.x.clamp(-2.0 * half, 0.0);
    -q.length() * sign(q.y)
}

/// Like `f32::signum` but zero maps to zero.
#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
pub(crate) fn bounds(center: Vec2, half: f32, expand: f32) -> Aabb {
    Aabb::around(center, half * BOUNDS_FACTOR + expand.max(0.0))
}
