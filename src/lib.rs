//! # imgpress
//!
//! A batch image optimizer. Point it at a directory of source images and a
//! target directory: every qualifying image (`png`, `jpg`, `jpeg`, `webp`)
//! is resized to fit within 1080×1350 and re-encoded as lossy WebP at the
//! mirrored relative path, and outputs that are already newer than their
//! source are skipped.
//!
//! ```text
//! imgpress photos/originals photos/optimized
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source tree, applies the extension allowlist, maps output paths |
//! | [`freshness`] | mtime comparison that decides skip vs. process |
//! | [`optimize`] | Orchestrator — per-file decision tree, counters, error recovery |
//! | [`imaging`] | Pure-Rust pixel work: decode, color normalization, resize, WebP encode |
//! | [`output`] | CLI output formatting — progress lines and the summary block |
//!
//! # Design Decisions
//!
//! ## One Pass, One Thread
//!
//! Files are processed strictly one at a time in walk order. There is no
//! job graph and no shared state beyond three counters, so interrupting the
//! process at any point leaves a valid partial target tree: finished
//! outputs are fresh on the next run, everything else is reattempted.
//!
//! ## mtime Freshness Instead of a Cache Manifest
//!
//! The skip decision compares modification times of source and output —
//! the filesystem itself is the only state. There is nothing to load,
//! version, or corrupt, and deleting any part of the target tree simply
//! causes those files to be rebuilt.
//!
//! ## Pure-Rust Imaging (No ImageMagick, No FFmpeg)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling) for
//! decoding and resizing and the `webp` crate for lossy WebP encoding.
//! This eliminates system dependencies entirely: no `apt install`, no
//! Homebrew, no version conflicts. The binary is fully self-contained.
//!
//! ## Per-File Error Recovery
//!
//! A corrupt or unreadable image is logged, counted, and stepped over. A
//! thousand-file batch is never aborted by one bad file; the only fatal
//! condition is a source root that does not exist.

pub mod freshness;
pub mod imaging;
pub mod optimize;
pub mod output;
pub mod scan;
