//! High-level QR badge generation.
//!
//! Runs the four pipeline stages in order: encode the matrix, render the
//! rounded modules, build the icon tile, paste it centered and save. Each
//! stage consumes the previous stage's output; the first error aborts the
//! remaining stages and nothing is written.

use std::path::Path;

use image::{imageops, RgbaImage};
use log::{debug, info};

use crate::error::Error;
use crate::icon;
use crate::matrix::ModuleMatrix;
use crate::render::render_modules;
use crate::style::Style;

/// Generates a styled QR code image with a centered icon and saves it.
///
/// Colors are hex strings (`#RRGGBB`, `#RGB`, or `#RRGGBBAA`); all other
/// parameters take their default values (see [`Style`]). The output format
/// follows the path's extension, so use `.png` for lossless output. On
/// success a confirmation naming the output file is printed.
///
/// # Arguments
///
/// * `payload` - The text to encode, e.g. a URI.
/// * `foreground` - Hex color for the modules and the recolored icon.
/// * `background` - Hex color for the image background and icon tile.
/// * `output_path` - Where to write the resulting image.
/// * `icon_path` - Path to the icon placed at the center of the code.
///
/// # Errors
///
/// Propagates the first failing stage: [`Error::InvalidColor`],
/// [`Error::Encoding`], [`Error::AssetNotFound`],
/// [`Error::UnsupportedFormat`], or [`Error::Write`].
///
/// # Example
///
/// ```rust,no_run
/// use qrbadge::generate;
///
/// generate(
///     "https://example.com",
///     "#1a73e8",
///     "#f1f3f4",
///     "qr.png",
///     "folder-icon.png",
/// ).unwrap();
/// ```
pub fn generate(
    payload: &str,
    foreground: &str,
    background: &str,
    output_path: impl AsRef<Path>,
    icon_path: impl AsRef<Path>,
) -> Result<(), Error> {
    let style = Style::default().with_colors(foreground, background)?;
    generate_styled(payload, &style, output_path, icon_path)
}

/// Generates a styled QR code image with explicit rendering parameters.
///
/// Same pipeline as [`generate`], but every knob comes from the caller's
/// [`Style`].
pub fn generate_styled(
    payload: &str,
    style: &Style,
    output_path: impl AsRef<Path>,
    icon_path: impl AsRef<Path>,
) -> Result<(), Error> {
    let output_path = output_path.as_ref();
    let icon_path = icon_path.as_ref();

    let matrix = ModuleMatrix::encode(payload, style)?;
    debug!(
        "encoded {} byte payload into {}x{} modules",
        payload.len(),
        matrix.side(),
        matrix.side()
    );

    let mut image = render_modules(&matrix, style);
    debug!("rendered {}x{} module image", image.width(), image.height());

    let loaded = icon::load_icon(icon_path)?;
    let recolored = icon::recolor(&loaded, style.foreground);
    let tile = icon::build_tile(&recolored, style, image.width());
    debug!("built {}x{} icon tile from {}", tile.width(), tile.height(), icon_path.display());

    paste_centered(&mut image, &tile);
    image
        .save(output_path)
        .map_err(|source| Error::Write { path: output_path.to_path_buf(), source })?;
    info!("saved QR badge to {}", output_path.display());
    println!("Custom QR code saved as {}", output_path.display());
    Ok(())
}

/// Pastes the tile onto the geometric center of the base image.
///
/// The offset is `((W - tile_w) / 2, (H - tile_h) / 2)` with integer
/// division; the tile's alpha decides which pixels cover the base.
pub fn paste_centered(base: &mut RgbaImage, tile: &RgbaImage) {
    let x = (i64::from(base.width()) - i64::from(tile.width())) / 2;
    let y = (i64::from(base.height()) - i64::from(tile.height())) / 2;
    imageops::overlay(base, tile, x, y);
}

/// Prints the module matrix to the console, quiet zone included.
pub fn print_qr(matrix: &ModuleMatrix) {
    let border = matrix.border() as i32;
    let side = matrix.side() as i32;
    for y in -border..side + border {
        for x in -border..side + border {
            let c: char = if matrix.is_dark(x, y) { '█' } else { ' ' };
            print!("{0}{0}", c);
        }
        println!();
    }
    println!();
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_paste_centered_even_dimensions() {
        let mut base = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let tile = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        paste_centered(&mut base, &tile);
        // Offset (3, 3): tile covers 3..7.
        assert_eq!(base.get_pixel(3, 3).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(6, 6).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(base.get_pixel(7, 7).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_paste_centered_odd_dimensions() {
        let mut base = RgbaImage::from_pixel(9, 11, Rgba([0, 0, 0, 255]));
        let tile = RgbaImage::from_pixel(4, 3, Rgba([255, 255, 255, 255]));
        paste_centered(&mut base, &tile);
        // Offsets floor to (2, 4): tile covers x 2..6, y 4..7.
        assert_eq!(base.get_pixel(2, 4).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(5, 6).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(1, 4).0, [0, 0, 0, 255]);
        assert_eq!(base.get_pixel(6, 4).0, [0, 0, 0, 255]);
        assert_eq!(base.get_pixel(2, 3).0, [0, 0, 0, 255]);
        assert_eq!(base.get_pixel(2, 7).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_print_qr_smoke() {
        let matrix = crate::matrix::ModuleMatrix::encode("HELLO", &crate::style::Style::default())
            .unwrap();
        print_qr(&matrix);
    }

    #[test]
    fn test_paste_respects_tile_alpha() {
        let mut base = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let tile = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        paste_centered(&mut base, &tile);
        // A fully transparent tile leaves the base untouched.
        assert_eq!(base.get_pixel(5, 5).0, [0, 0, 0, 255]);
    }
}
