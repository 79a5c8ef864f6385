//! Rasterization of a module matrix into a styled RGBA image.

use image::{GrayImage, Luma, RgbaImage};

use crate::matrix::ModuleMatrix;
use crate::style::Style;

/// Renders the matrix as a colored image with rounded-corner modules.
///
/// The buffer is `matrix.pixel_side(style.module_size)` pixels square, filled
/// with the background color. Every dark module is drawn as a filled rounded
/// rectangle of the styled corner radius, inset exactly to the module's pixel
/// block. The radius is clamped to half the module size; a radius of 0 draws
/// sharp squares.
///
/// # Example
///
/// ```rust
/// use qrbadge::matrix::ModuleMatrix;
/// use qrbadge::render::render_modules;
/// use qrbadge::style::Style;
///
/// let style = Style::default();
/// let matrix = ModuleMatrix::encode("HELLO", &style).unwrap();
/// let image = render_modules(&matrix, &style);
/// assert_eq!(image.dimensions(), (290, 290));
/// ```
pub fn render_modules(matrix: &ModuleMatrix, style: &Style) -> RgbaImage {
    let module = style.module_size;
    let radius = style.corner_radius.min(module / 2);
    let border = matrix.border() as i32;
    let span = matrix.side_with_border();

    let mut img = RgbaImage::from_pixel(span * module, span * module, style.background);
    for my in 0..span {
        for mx in 0..span {
            if !matrix.is_dark(mx as i32 - border, my as i32 - border) {
                continue;
            }
            let (x0, y0) = (mx * module, my * module);
            for dy in 0..module {
                for dx in 0..module {
                    if in_rounded_rect(dx, dy, module, radius) {
                        img.put_pixel(x0 + dx, y0 + dy, style.foreground);
                    }
                }
            }
        }
    }
    img
}

/// Renders the matrix as a plain monochrome image, one `module_size` pixel
/// block per module, dark modules black and everything else white.
///
/// This is the unstyled rendition the styled renderer must agree with; it is
/// also handy as a debugging view.
pub fn render_mono(matrix: &ModuleMatrix, module_size: u32) -> GrayImage {
    let border = matrix.border() as i32;
    let side = matrix.pixel_side(module_size);
    let mut img = GrayImage::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mx = (x / module_size) as i32 - border;
        let my = (y / module_size) as i32 - border;
        *pixel = if matrix.is_dark(mx, my) {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        };
    }
    img
}

// A pixel is outside the rounded rectangle only when it falls in one of the
// four radius-sized corner squares and beyond that corner's quarter circle.
// Pixel centers are sampled at (dx + 0.5, dy + 0.5).
fn in_rounded_rect(dx: u32, dy: u32, side: u32, radius: u32) -> bool {
    if radius == 0 {
        return true;
    }
    let r = radius as f32;
    let s = side as f32;
    let px = dx as f32 + 0.5;
    let py = dy as f32 + 0.5;

    let cx = if px < r {
        r
    } else if px > s - r {
        s - r
    } else {
        return true;
    };
    let cy = if py < r {
        r
    } else if py > s - r {
        s - r
    } else {
        return true;
    };
    (px - cx) * (px - cx) + (py - cy) * (py - cy) <= r * r
}
