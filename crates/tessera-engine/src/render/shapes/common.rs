//! Coverage functions shared by every shape kind.
//!
//! Both take a signed distance in world units and the width `aa` of the
//! anti-aliasing band (also world units). A band of width `<= 0`, or one
//! that is not finite, turns either function into a hard step at the edge.

// ── fill ──────────────────────────────────────────────────────────────────

/// Fill coverage for a pixel at signed distance `d` from the boundary.
///
/// - `d >= aa/2` → 0 (outside the band)
/// - `d <= -aa/2` → 1 (inside the band)
/// - linear ramp in between, exactly 0.5 on the boundary
#[inline]
pub fn fill_alpha(d: f32, aa: f32) -> f32 {
    if aa <= 0.0 || !aa.is_finite() {
        return if d <= 0.0 { 1.0 } else { 0.0 };
    }
    let half = aa * 0.5;
    if d >= half {
        0.0
    } else if d <= -half {
        1.0
    } else {
        ((-d + half) / aa).clamp(0.0, 1.0)
    }
}

// ── stroke ────────────────────────────────────────────────────────────────

/// Stroke coverage for a pixel at signed distance `d`, for a stroke covering
/// the signed-distance interval `band` (`[min, max]`).
///
/// Full coverage inside the band, falling linearly to 0 at `aa/2` past
/// either band edge. An empty band (`min == max`) never covers anything.
#[inline]
pub fn stroke_alpha(d: f32, band: (f32, f32), aa: f32) -> f32 {
    let (min, max) = band;
    if max <= min {
        return 0.0;
    }
    let gap = if d < min {
        min - d
    } else if d > max {
        d - max
    } else {
        0.0
    };
    if aa <= 0.0 || !aa.is_finite() {
        return if gap <= 0.0 { 1.0 } else { 0.0 };
    }
    let half = aa * 0.5;
    if gap >= half { 0.0 } else { 1.0 - gap / half }
}
