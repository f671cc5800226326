use super::Vec2;

/// Axis-aligned box in world units (+Y down).
///
/// Used to over-approximate the region a shape can touch so the compositor
/// can skip distance evaluation for pixels that cannot be affected.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Square box of half-width `half_extent` centered on `center`.
    #[inline]
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self::around_xy(center, Vec2::new(half_extent, half_extent))
    }

    /// Box with per-axis half-extents centered on `center`.
    #[inline]
    pub fn around_xy(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Closed containment: `[min, max]` on both axes.
    ///
    /// Both edges are inclusive; a pixel center lying exactly on the box
    /// boundary must never be culled.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn contains_xy(self, x: f32, y: f32) -> bool {
        self.contains(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Aabb {
        Aabb::around(Vec2::zero(), 1.0)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn around_is_symmetric() {
        let b = Aabb::around(Vec2::new(2.0, -3.0), 0.5);
        assert_eq!(b.min, Vec2::new(1.5, -3.5));
        assert_eq!(b.max, Vec2::new(2.5, -2.5));
        assert_eq!(b.width(), 1.0);
        assert_eq!(b.height(), 1.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(unit().contains(Vec2::new(0.25, -0.5)));
    }

    #[test]
    fn contains_both_edges_inclusive() {
        assert!(unit().contains(Vec2::new(-1.0, -1.0)));
        assert!(unit().contains(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!unit().contains(Vec2::new(1.01, 0.0)));
        assert!(!unit().contains_xy(0.0, -1.01));
    }
}
