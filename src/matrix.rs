//! QR module matrix generation.
//!
//! Encoding is delegated to the `qrcode` crate; this module wraps the result
//! in a [`ModuleMatrix`] that carries the quiet-zone border and exposes the
//! boolean module grid directly. The renderer reads this grid rather than
//! probing pixels of an intermediate rasterization, so rounded-corner drawing
//! can never disagree with the encoder at module edges.

use qrcode::types::QrError;
use qrcode::{Color, QrCode, Version};

use crate::error::Error;
use crate::style::Style;

/// A QR code's dark/light module grid plus its quiet-zone border width.
///
/// The grid is immutable after encoding. Coordinates are in modules relative
/// to the top-left data module; the border is bookkeeping only and is always
/// light.
///
/// # Example
///
/// ```rust
/// use qrbadge::matrix::ModuleMatrix;
/// use qrbadge::style::Style;
///
/// let matrix = ModuleMatrix::encode("HELLO", &Style::default()).unwrap();
/// assert_eq!(matrix.side(), 21); // version 1
/// assert!(matrix.is_dark(0, 0)); // finder pattern corner
/// ```
#[derive(Debug, Clone)]
pub struct ModuleMatrix {
    side: u32,
    border: u32,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Encodes a payload into a module matrix.
    ///
    /// The styled version hint is tried first; if the payload does not fit at
    /// that version, the encoder falls back to the smallest version that can
    /// hold it ("fit" mode). The error correction level is taken from the
    /// style and never lowered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the payload cannot be encoded at any
    /// supported version.
    pub fn encode(payload: &str, style: &Style) -> Result<Self, Error> {
        let hinted = Version::Normal(style.version_hint);
        let code = match QrCode::with_version(payload, hinted, style.ec_level) {
            Err(QrError::DataTooLong) => {
                QrCode::with_error_correction_level(payload, style.ec_level)?
            }
            other => other?,
        };
        Ok(Self::from_code(&code, style.border))
    }

    fn from_code(code: &QrCode, border: u32) -> Self {
        let side = code.width() as u32;
        let modules = code
            .to_colors()
            .iter()
            .map(|c| *c == Color::Dark)
            .collect();
        ModuleMatrix { side, border, modules }
    }

    /// Side length of the data grid in modules, excluding the border.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Quiet-zone width in modules on each side.
    pub fn border(&self) -> u32 {
        self.border
    }

    /// Side length in modules including the border on both sides.
    pub fn side_with_border(&self) -> u32 {
        self.side + 2 * self.border
    }

    /// Side length in pixels when rendered at the given module size,
    /// border included.
    pub fn pixel_side(&self, module_size: u32) -> u32 {
        self.side_with_border() * module_size
    }

    /// Returns whether the module at the given data-grid coordinates is dark.
    ///
    /// Coordinates outside the grid (including the quiet zone) are light.
    pub fn is_dark(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.side || y as u32 >= self.side {
            return false;
        }
        self.modules[(y as u32 * self.side + x as u32) as usize]
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_payload_stays_at_hinted_version() {
        let matrix = ModuleMatrix::encode("HELLO", &Style::default()).unwrap();
        assert_eq!(matrix.side(), 21);
        assert_eq!(matrix.side_with_border(), 29);
        assert_eq!(matrix.pixel_side(10), 290);
    }

    #[test]
    fn test_long_payload_upgrades_version() {
        // Far beyond version 1 capacity at high error correction.
        let payload = "https://example.com/a/very/long/path?with=query&and=more";
        let matrix = ModuleMatrix::encode(payload, &Style::default()).unwrap();
        assert!(matrix.side() > 21);
        // QR sides are always 4v + 17.
        assert_eq!((matrix.side() - 17) % 4, 0);
    }

    #[test]
    fn test_unencodable_payload_fails() {
        let payload = "x".repeat(10_000);
        assert!(matches!(
            ModuleMatrix::encode(&payload, &Style::default()),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn test_finder_patterns_are_dark() {
        let matrix = ModuleMatrix::encode("HELLO", &Style::default()).unwrap();
        let last = matrix.side() as i32 - 1;
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(last, 0));
        assert!(matrix.is_dark(0, last));
    }

    #[test]
    fn test_out_of_range_is_light() {
        let matrix = ModuleMatrix::encode("HELLO", &Style::default()).unwrap();
        assert!(!matrix.is_dark(-1, 0));
        assert!(!matrix.is_dark(0, -1));
        assert!(!matrix.is_dark(matrix.side() as i32, 0));
    }
}
