//! Pure Rust conversion backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (JPEG, PNG, WebP) | `image` crate (pure Rust decoders) |
//! | Color normalization | `DynamicImage::to_rgb8` / `to_rgba8` |
//! | Resize | `image::DynamicImage::resize` with `Lanczos3` filter |
//! | Encode → WebP | `webp` crate (`WebPConfig` quality + method) |
//!
//! ## Color normalization
//!
//! Output pixels are 8-bit RGB, with one exception: a PNG source that
//! carries an alpha channel keeps it, so transparency survives the
//! conversion. Alpha from any other source format (e.g. WebP) is flattened
//! to RGB, and a JPEG source can never produce an alpha-carrying output.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{ConvertParams, Effort, Quality};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` and `webp` crates.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Normalize the decoded color mode for encoding.
///
/// PNG sources with an alpha channel become RGBA8; everything else becomes
/// RGB8. Already-normalized images pass through without a pixel copy.
fn normalize_color(img: DynamicImage, source_is_png: bool) -> DynamicImage {
    if source_is_png && img.color().has_alpha() {
        match img {
            DynamicImage::ImageRgba8(_) => img,
            other => DynamicImage::ImageRgba8(other.to_rgba8()),
        }
    } else {
        match img {
            DynamicImage::ImageRgb8(_) => img,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        }
    }
}

/// Encode and save as lossy WebP.
fn save_webp(
    img: &DynamicImage,
    path: &Path,
    quality: Quality,
    effort: Effort,
) -> Result<(), BackendError> {
    let encoder = webp::Encoder::from_image(img)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {}", e)))?;

    let mut config = webp::WebPConfig::new()
        .map_err(|_| BackendError::ProcessingFailed("WebP config init failed".to_string()))?;
    config.lossless = 0;
    config.quality = quality.value() as f32;
    config.method = effort.value() as i32;

    let data = encoder
        .encode_advanced(&config)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {:?}", e)))?;
    std::fs::write(path, &*data).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn convert(&self, params: &ConvertParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let img = normalize_color(img, is_png(&params.source));

        let img = if img.width() != params.width || img.height() != params.height {
            img.resize(params.width, params.height, FilterType::Lanczos3)
        } else {
            img
        };

        save_webp(&img, &params.output, params.quality, params.effort)
    }
}
