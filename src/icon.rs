//! Icon loading, recoloring, and tile composition.
//!
//! The icon keeps its alpha silhouette but loses its original coloring: every
//! pixel's RGB is forced to the foreground color while its alpha is preserved
//! bit for bit. The recolored icon is then scaled down and centered on a
//! background-colored tile that the assembler pastes over the code.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageReader, Rgba, RgbaImage};

use crate::error::Error;
use crate::style::Style;

/// Loads an icon image from disk as RGBA.
///
/// Sources without an alpha channel get a fully opaque one.
///
/// # Errors
///
/// Returns [`Error::AssetNotFound`] if the path is missing or unreadable and
/// [`Error::UnsupportedFormat`] if the file cannot be decoded as an image.
pub fn load_icon(path: &Path) -> Result<RgbaImage, Error> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| Error::AssetNotFound { path: path.to_path_buf(), source })?;
    let img = reader
        .decode()
        .map_err(|source| Error::UnsupportedFormat { path: path.to_path_buf(), source })?;
    Ok(img.to_rgba8())
}

/// Recolors an icon to a single color, preserving its alpha silhouette.
///
/// Every pixel keeps its alpha value exactly; every pixel's color channels
/// become `color`. Fully transparent pixels therefore stay invisible and
/// opaque pixels become solid `color`, with partial alpha carried through
/// unchanged.
pub fn recolor(icon: &RgbaImage, color: Rgba<u8>) -> RgbaImage {
    let mut out = icon.clone();
    for pixel in out.pixels_mut() {
        let alpha = pixel.0[3];
        *pixel = Rgba([color.0[0], color.0[1], color.0[2], alpha]);
    }
    out
}

/// Scales the icon and centers it on a padded background tile.
///
/// The icon is resized to `image_width / style.icon_divisor` pixels square
/// with Lanczos3 resampling, then alpha-composited onto a
/// `(icon_size + icon_margin)` square tile of background color, offset by
/// half the margin so it sits centered.
pub fn build_tile(icon: &RgbaImage, style: &Style, image_width: u32) -> RgbaImage {
    let icon_size = (image_width / style.icon_divisor).max(1);
    let resized = imageops::resize(icon, icon_size, icon_size, FilterType::Lanczos3);

    let tile_side = icon_size + style.icon_margin;
    let mut tile = RgbaImage::from_pixel(tile_side, tile_side, style.background);
    let offset = (style.icon_margin / 2) as i64;
    imageops::overlay(&mut tile, &resized, offset, offset);
    tile
}
