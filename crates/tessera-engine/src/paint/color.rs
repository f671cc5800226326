/// Opaque 8-bit sRGB color. This is what the pixel grid stores.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Integer luma approximation: `(54R + 183G + 19B) >> 8`.
    ///
    /// The weights sum to 256, so white maps to 255 and black to 0.
    #[inline]
    pub fn luminance(self) -> u8 {
        ((54 * self.r as u32 + 183 * self.g as u32 + 19 * self.b as u32) >> 8) as u8
    }

    /// Blends straight-alpha `src` (channels in `0.0..=255.0`) over `self`.
    ///
    /// `result = src × alpha + self × (1 − alpha)`, rounded to the nearest
    /// integer and clamped to `[0, 255]` per channel.
    #[inline]
    pub fn blend(self, src: [f32; 3], alpha: f32) -> Color {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |s: f32, d: u8| -> u8 { to_channel(s * a + d as f32 * (1.0 - a)) };
        Color::rgb(mix(src[0], self.r), mix(src[1], self.g), mix(src[2], self.b))
    }
}

#[inline]
fn to_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Premultiplied color accumulator with channels in `0.0..=255.0`.
///
/// Invariant: each rgb channel is already scaled by `a`.
///
/// Used to merge a shape's stroke over its own fill before the result is
/// laid over the pixel grid.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Premul {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Premul {
    /// Premultiplies an opaque color by `alpha`.
    #[inline]
    pub fn from_color(color: Color, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        Self {
            r: color.r as f32 * a,
            g: color.g as f32 * a,
            b: color.b as f32 * a,
            a,
        }
    }

    /// Source-over: `self + under × (1 − self.a)`.
    #[inline]
    pub fn over(self, under: Premul) -> Premul {
        let k = 1.0 - self.a;
        Premul {
            r: self.r + under.r * k,
            g: self.g + under.g * k,
            b: self.b + under.b * k,
            a: self.a + under.a * k,
        }
    }

    /// Returns the straight-alpha `(rgb, alpha)` pair.
    ///
    /// For `a <= 0` there is no color to recover and `None` is returned.
    #[inline]
    pub fn unpremultiply(self) -> Option<([f32; 3], f32)> {
        if self.a <= 0.0 {
            return None;
        }
        let inv = 1.0 / self.a;
        Some(([self.r * inv, self.g * inv, self.b * inv], self.a))
    }
}
