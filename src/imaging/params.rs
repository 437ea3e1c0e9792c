//! Parameter types for image conversion.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the orchestrator (which decides which files to convert
//! and at what dimensions) and the [`backend`](super::backend) (which does
//! the actual pixel work). The separation allows swapping backends
//! (e.g. for testing with a mock) without changing orchestration logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 85). Clamped on construction.
//! - [`Effort`] — WebP compression effort a.k.a. "method" (0–6, default 6). Clamped on construction.
//! - [`ConvertParams`] — Full specification for one conversion: source, output path, target dimensions, quality, effort.

use std::path::PathBuf;

/// Quality setting for lossy WebP encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(85)
    }
}

/// WebP compression effort (libwebp "method", 0-6).
///
/// Higher values spend more CPU for smaller files. 6 is libwebp's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effort(pub u32);

impl Effort {
    pub fn new(value: u32) -> Self {
        Self(value.min(6))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Effort {
    fn default() -> Self {
        Self(6)
    }
}

/// Parameters for converting one source image into one WebP output.
///
/// `width`/`height` are the final output dimensions, already bounded by the
/// caller — the backend resizes to exactly these when they differ from the
/// source dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
    pub effort: Effort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_85() {
        assert_eq!(Quality::default().value(), 85);
    }

    #[test]
    fn effort_clamps_to_libwebp_range() {
        assert_eq!(Effort::new(0).value(), 0);
        assert_eq!(Effort::new(4).value(), 4);
        assert_eq!(Effort::new(9).value(), 6);
    }

    #[test]
    fn effort_default_is_max() {
        assert_eq!(Effort::default().value(), 6);
    }
}
