//! Error taxonomy for the QR badge pipeline.
//!
//! Each pipeline stage propagates the first error it encounters to the caller
//! with `?`; nothing is recovered internally and no partial output file is
//! written.

use std::path::PathBuf;

/// Errors returned by the QR badge pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The payload cannot be encoded at any supported QR version.
    #[error("payload cannot be encoded as a QR code: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    /// A color string could not be parsed.
    #[error("invalid color {0:?}, expected #RGB, #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// The icon path does not resolve to a readable file.
    #[error("icon not found or unreadable: {path}")]
    AssetNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The icon file exists but cannot be decoded as an image.
    #[error("icon could not be decoded as an image: {path}")]
    UnsupportedFormat {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The output image could not be written.
    #[error("failed to write output image to {path}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}
