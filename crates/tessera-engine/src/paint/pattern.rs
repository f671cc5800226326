use core::str::FromStr;

use super::Color;

/// Two-color stripe pattern resolved per pixel by index parity.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Pattern {
    /// Horizontal stripes, one pixel row per band ("striped-horizontal").
    #[default]
    Breton,
    /// Vertical stripes, one pixel column per band ("striped-vertical").
    Pinstripe,
}

impl Pattern {
    pub const NAMES: [&'static str; 4] =
        ["striped-horizontal", "breton", "striped-vertical", "pinstripe"];

    /// Ink on even rows (Breton) or even columns (Pinstripe), paper otherwise.
    #[inline]
    pub fn pick(self, ink: Color, paper: Color, x: u32, y: u32) -> Color {
        let index = match self {
            Pattern::Breton => y,
            Pattern::Pinstripe => x,
        };
        if index % 2 == 0 { ink } else { paper }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Breton => "striped-horizontal",
            Pattern::Pinstripe => "striped-vertical",
        }
    }
}

impl FromStr for Pattern {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "striped-horizontal" | "breton" => Ok(Pattern::Breton),
            "striped-vertical" | "pinstripe" => Ok(Pattern::Pinstripe),
            _ => Err(()),
        }
    }
}

/// Canvas background: a pattern painted before any shape.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Background {
    pub ink: Color,
    pub paper: Color,
    pub pattern: Pattern,
}

impl Background {
    #[inline]
    pub const fn new(ink: Color, paper: Color, pattern: Pattern) -> Self {
        Self { ink, paper, pattern }
    }

    /// Single-color background.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::new(color, color, Pattern::Breton)
    }

    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Color {
        self.pattern.pick(self.ink, self.paper, x, y)
    }
}
