//! Styling parameters for the rendered QR badge.
//!
//! Every knob the pipeline uses lives in [`Style`] so callers and tests can
//! vary them instead of relying on hard-coded literals. The defaults mirror
//! the classic look: 10 px modules with a 1 px corner radius, a 4-module
//! quiet zone, high error correction, and a centered icon one fifth as wide
//! as the code with a 20 px padded tile.

use image::Rgba;
use qrcode::EcLevel;

use crate::error::Error;

/// Rendering parameters for a QR badge.
///
/// # Example
///
/// ```rust
/// use qrbadge::style::Style;
///
/// let style = Style::default()
///     .with_colors("#1a73e8", "#f1f3f4")
///     .unwrap();
/// assert_eq!(style.module_size, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Style {
    /// Side length of one module's pixel block.
    pub module_size: u32,
    /// Corner radius of each dark module, in pixels. Clamped to half the
    /// module size when rendering; 0 draws sharp squares.
    pub corner_radius: u32,
    /// Quiet-zone width in modules on every side.
    pub border: u32,
    /// Error correction strength of the encoded matrix.
    pub ec_level: EcLevel,
    /// Preferred QR version (1 to 40). The encoder upgrades to the smallest
    /// version that fits when the payload exceeds this version's capacity.
    pub version_hint: i16,
    /// The icon is scaled to `image_width / icon_divisor` pixels.
    pub icon_divisor: u32,
    /// Total padding around the icon inside its background tile, in pixels.
    pub icon_margin: u32,
    /// Color of dark modules and of the recolored icon.
    pub foreground: Rgba<u8>,
    /// Color of the image background and of the icon tile.
    pub background: Rgba<u8>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            module_size: 10,
            corner_radius: 1,
            border: 4,
            ec_level: EcLevel::H,
            version_hint: 1,
            icon_divisor: 5,
            icon_margin: 20,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

impl Style {
    /// Replaces the foreground and background colors, parsing both from hex
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if either string is not a valid hex
    /// color.
    pub fn with_colors(mut self, foreground: &str, background: &str) -> Result<Self, Error> {
        self.foreground = parse_color(foreground)?;
        self.background = parse_color(background)?;
        Ok(self)
    }
}

/// Parses a hex color string into an RGBA pixel.
///
/// Accepts `#RGB`, `#RRGGBB`, and `#RRGGBBAA`, with or without the leading
/// `#`. Three- and six-digit forms are fully opaque.
///
/// # Example
///
/// ```rust
/// use qrbadge::style::parse_color;
/// use image::Rgba;
///
/// assert_eq!(parse_color("#1a73e8").unwrap(), Rgba([0x1a, 0x73, 0xe8, 255]));
/// ```
pub fn parse_color(s: &str) -> Result<Rgba<u8>, Error> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || Error::InvalidColor(s.to_string());

    let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
    let digits: Vec<u8> = hex.chars().map(nibble).collect::<Option<_>>().ok_or_else(invalid)?;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0]))
        }
        _ => Err(invalid()),
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_color() {
        assert_eq!(parse_color("#1a73e8").unwrap(), Rgba([0x1a, 0x73, 0xe8, 255]));
        assert_eq!(parse_color("f1f3f4").unwrap(), Rgba([0xf1, 0xf3, 0xf4, 255]));
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(parse_color("#fff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_color("#00ff0080").unwrap(), Rgba([0, 255, 0, 0x80]));
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for bad in ["", "#12345", "#gggggg", "not a color"] {
            assert!(matches!(parse_color(bad), Err(Error::InvalidColor(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_with_colors_replaces_defaults() {
        let style = Style::default().with_colors("#1a73e8", "#f1f3f4").unwrap();
        assert_eq!(style.foreground, Rgba([0x1a, 0x73, 0xe8, 255]));
        assert_eq!(style.background, Rgba([0xf1, 0xf3, 0xf4, 255]));
    }
}
