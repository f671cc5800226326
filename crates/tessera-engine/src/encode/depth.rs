use core::str::FromStr;

/// Terminal color capability used when encoding cells.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorDepth {
    /// 24-bit `38;2` / `48;2` escapes.
    #[default]
    Full,
    /// 6×6×6 cube of the 256-color palette.
    Quantized256,
    /// No escapes; glyph choice encodes brightness.
    Monochrome,
}

impl ColorDepth {
    pub const NAMES: [&'static str; 3] = ["full", "quantized256", "monochrome"];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorDepth::Full => "full",
            ColorDepth::Quantized256 => "quantized256",
            ColorDepth::Monochrome => "monochrome",
        }
    }

    /// Picks a depth from terminal environment values.
    ///
    /// Callers pass the raw values of `COLORTERM`, `TERM` and `NO_COLOR`
    /// (`None` when unset) so this stays free of process-global reads.
    ///
    /// - `NO_COLOR` present → monochrome
    /// - `COLORTERM` is `truecolor` or `24bit` → full
    /// - `TERM` absent, empty or `dumb` → monochrome
    /// - anything else → 256 colors
    pub fn detect(colorterm: Option<&str>, term: Option<&str>, no_color: Option<&str>) -> Self {
        if no_color.is_some_and(|v| !v.is_empty()) {
            return ColorDepth::Monochrome;
        }
        if let Some(ct) = colorterm {
            let ct = ct.to_ascii_lowercase();
            if ct == "truecolor" || ct == "24bit" {
                return ColorDepth::Full;
            }
        }
        match term {
            None => ColorDepth::Monochrome,
            Some(t) if t.is_empty() || t == "dumb" => ColorDepth::Monochrome,
            Some(_) => ColorDepth::Quantized256,
        }
    }
}

impl FromStr for ColorDepth {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" | "truecolor" | "24bit" => Ok(ColorDepth::Full),
            "quantized256" | "256" => Ok(ColorDepth::Quantized256),
            "monochrome" | "mono" => Ok(ColorDepth::Monochrome),
            _ => Err(()),
        }
    }
}
