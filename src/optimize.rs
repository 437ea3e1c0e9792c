//! Batch optimization orchestrator.
//!
//! One sequential pass over the source tree. Each qualifying file goes
//! through a per-file decision tree:
//!
//! ```text
//! qualify? ──no──▶ ignored (no counter)
//!    │yes
//! fresh? ───yes─▶ skipped
//!    │no
//! convert ──ok──▶ processed (reduction reported)
//!    │err
//!    ▼
//! errored (logged, run continues)
//! ```
//!
//! A failure on a single file never aborts the run: the error is reported
//! through the event callback, counted, and the walk moves on. The only
//! fatal condition is a missing source root, diagnosed before the walk
//! starts. Interrupting the process mid-run leaves the target tree in a
//! valid partial state — finished outputs are fresh on the next run and
//! everything else is simply reattempted.

use crate::freshness;
use crate::imaging::{
    BackendError, ConvertParams, Effort, ImageBackend, Quality, RustBackend, fit_within,
};
use crate::scan::{self, SourceImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed bounding box every output must fit within (width, height).
pub const BOUNDING_BOX: (u32, u32) = (1080, 1350);

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("source directory does not exist: {0}")]
    SourceRootMissing(PathBuf),
}

/// Knobs for a run. The CLI always uses the defaults; tests tighten them.
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    /// Maximum output dimensions (width, height).
    pub bounds: (u32, u32),
    pub quality: Quality,
    pub effort: Effort,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            bounds: BOUNDING_BOX,
            quality: Quality::default(),
            effort: Effort::default(),
        }
    }
}

/// Counters accumulated across one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: u32,
    pub skipped: u32,
    pub errors: u32,
}

/// Per-file outcome, reported through the event callback as the walk runs.
#[derive(Debug, Clone, PartialEq)]
pub enum FileEvent {
    Optimized {
        relative: PathBuf,
        /// Size reduction vs. the source file, as a percentage.
        reduction_pct: f64,
    },
    Skipped {
        relative: PathBuf,
    },
    Errored {
        relative: PathBuf,
        message: String,
    },
}

/// Run the optimizer with the production backend and default settings,
/// printing one progress line per file.
pub fn optimize(source_root: &Path, target_root: &Path) -> Result<RunSummary, OptimizeError> {
    optimize_with_backend(
        &RustBackend::new(),
        source_root,
        target_root,
        &OptimizeConfig::default(),
        crate::output::print_file_event,
    )
}

/// Run the optimizer with a specific backend (allows testing with a mock).
pub fn optimize_with_backend(
    backend: &impl ImageBackend,
    source_root: &Path,
    target_root: &Path,
    config: &OptimizeConfig,
    mut on_event: impl FnMut(&FileEvent),
) -> Result<RunSummary, OptimizeError> {
    if !source_root.is_dir() {
        return Err(OptimizeError::SourceRootMissing(source_root.to_path_buf()));
    }

    let mut summary = RunSummary::default();

    for image in scan::discover(source_root, target_root) {
        if freshness::is_fresh(&image.source, &image.output) {
            summary.skipped += 1;
            on_event(&FileEvent::Skipped {
                relative: image.relative,
            });
            continue;
        }

        match convert_one(backend, &image, config) {
            Ok(reduction_pct) => {
                summary.processed += 1;
                on_event(&FileEvent::Optimized {
                    relative: image.relative,
                    reduction_pct,
                });
            }
            Err(err) => {
                summary.errors += 1;
                on_event(&FileEvent::Errored {
                    relative: image.relative,
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(summary)
}

/// Convert a single image, returning the size reduction percentage.
///
/// Creates the output's parent directories on demand; any failure here is a
/// per-file error like every other conversion failure.
fn convert_one(
    backend: &impl ImageBackend,
    image: &SourceImage,
    config: &OptimizeConfig,
) -> Result<f64, BackendError> {
    if let Some(parent) = image.output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let dims = backend.identify(&image.source)?;
    let (width, height) = fit_within((dims.width, dims.height), config.bounds);

    backend.convert(&ConvertParams {
        source: image.source.clone(),
        output: image.output.clone(),
        width,
        height,
        quality: config.quality,
        effort: config.effort,
    })?;

    let original_size = std::fs::metadata(&image.source)?.len();
    let new_size = std::fs::metadata(&image.output)?.len();
    Ok(size_reduction(original_size, new_size))
}

/// `1 - new/original` as a percentage. Negative when the output grew.
pub fn size_reduction(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - new as f64 / original as f64) * 100.0
}
