//! # qrbadge
//!
//! A Rust library for generating stylized QR codes with a centered icon.
//!
//! `qrbadge` encodes a payload into a QR code (via the [`qrcode`] crate),
//! draws every dark module as a rounded-corner square in a custom foreground
//! color over a custom background color, recolors a caller-supplied icon to
//! the foreground color while preserving its alpha silhouette, and pastes the
//! icon on a padded background tile at the center of the code.
//!
//! ## Features
//!
//! - Rounded-corner modules with configurable radius, size, and quiet zone.
//! - Foreground/background colors from hex strings (`#RGB`, `#RRGGBB`,
//!   `#RRGGBBAA`).
//! - Alpha-preserving icon recoloring with Lanczos3 scaling and a padded
//!   center tile.
//! - Automatic QR version upgrade when the payload outgrows the hinted
//!   version, at high error correction by default.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrbadge = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Generate a styled QR code with an icon:
//!
//! ```rust,no_run
//! use qrbadge::generate;
//!
//! fn main() {
//!     generate(
//!         "https://example.com",
//!         "#1a73e8", // Blue modules and icon
//!         "#f1f3f4", // Light gray background
//!         "qr.png",
//!         "folder-icon.png",
//!     ).expect("Failed to generate QR badge");
//! }
//! ```
//!
//! Customize the rendering parameters:
//!
//! ```rust,no_run
//! use qrbadge::{generate_styled, Style};
//!
//! fn main() {
//!     let mut style = Style::default()
//!         .with_colors("#000000", "#ffffff")
//!         .expect("Failed to parse colors");
//!     style.module_size = 8;
//!     style.corner_radius = 3;
//!     generate_styled("Hello, World!", &style, "qr.png", "logo.png")
//!         .expect("Failed to generate QR badge");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: QR module matrix generation.
//! - [`render`]: Rasterization of the matrix with rounded modules.
//! - [`icon`]: Icon recoloring and tile composition.
//! - [`pipeline`]: The end-to-end generation pipeline.
//! - [`style`]: Rendering parameters and color parsing.
//! - [`error`]: The pipeline error taxonomy.

#![forbid(unsafe_code)]

pub mod error;
pub mod icon;
pub mod matrix;
pub mod pipeline;
pub mod render;
pub mod style;

pub use error::Error;
pub use matrix::ModuleMatrix;
pub use pipeline::{generate, generate_styled, paste_centered, print_qr};
pub use render::{render_modules, render_mono};
pub use style::Style;
