//! Image conversion — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode** | `image` crate (JPEG, PNG, WebP) |
//! | **Resize** | Lanczos3, downscale only |
//! | **Encode → WebP** | `webp` crate, fixed quality and effort |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a conversion
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::fit_within;
pub use params::{ConvertParams, Effort, Quality};
pub use rust_backend::RustBackend;
