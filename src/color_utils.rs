/// Color parsing and canvas color scheme utilities
use crate::error::{Result, SpiralError};
use palette::Srgb;

pub const DEFAULT_BACKGROUND: &str = "#333";
pub const DEFAULT_FILL: &str = "#fff";

/// Parse a hex color string into an sRGB color
/// Accepts:
/// - #RGB or RGB
/// - #RRGGBB or RRGGBB
pub fn parse_color(color_str: &str) -> Result<Srgb<u8>> {
    color_str
        .trim()
        .parse::<Srgb<u8>>()
        .map_err(|e| SpiralError::config(format!("invalid color '{color_str}': {e}")))
}

/// Format a color as a `#rrggbb` attribute value
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Convert to a tiny-skia color for raster output
pub fn to_skia(color: Srgb<u8>) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, 255)
}

/// Background and circle fill used by the renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub background: Srgb<u8>,
    pub fill: Srgb<u8>,
}

impl ColorScheme {
    pub fn parse(background: &str, fill: &str) -> Result<Self> {
        Ok(ColorScheme {
            background: parse_color(background)?,
            fill: parse_color(fill)?,
        })
    }

    /// Swap background and fill, as written to the inverted document
    pub fn inverted(self) -> Self {
        ColorScheme {
            background: self.fill,
            fill: self.background,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: Srgb::new(0x33, 0x33, 0x33),
            fill: Srgb::new(0xff, 0xff, 0xff),
        }
    }
}
