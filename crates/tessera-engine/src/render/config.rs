/// Default anti-aliasing band width in screen pixels.
///
/// Visual calibration only; any non-negative value renders correctly.
pub const DEFAULT_AA_REGION_PX: f32 = 0.85;

/// Per-render settings, threaded explicitly through every render call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Skip distance evaluation for pixels outside a shape's bounds.
    ///
    /// Performance only: output is identical with culling on or off.
    pub culling: bool,

    /// Width of the anti-aliasing band in screen pixels. Values `<= 0`
    /// produce hard (aliased) edges.
    pub aa_region_px: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            culling: true,
            aa_region_px: DEFAULT_AA_REGION_PX,
        }
    }
}

impl RenderConfig {
    #[inline]
    pub fn with_culling(mut self, culling: bool) -> Self {
        self.culling = culling;
        self
    }

    #[inline]
    pub fn with_aa_region_px(mut self, px: f32) -> Self {
        self.aa_region_px = px;
        self
    }
}
