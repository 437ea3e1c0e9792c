//! Freshness checks for incremental re-runs.
//!
//! Re-encoding is the expensive part of a run, so an output that is already
//! newer than its source is not re-done. The check is mtime-based: an output
//! is fresh when it exists and its modification time is at or after the
//! source's. This makes each run idempotent — a second pass over unchanged
//! sources does no pixel work.
//!
//! A modification time that cannot be read (missing file, filesystem without
//! mtime support, permission problem) counts as stale, so the file is
//! (re)processed. Reprocessing is idempotent; skipping on bad metadata could
//! strand a stale output.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Whether `output` is at least as new as `source`.
///
/// Returns `false` when either modification time is unavailable.
pub fn is_fresh(source: &Path, output: &Path) -> bool {
    let (Ok(src), Ok(out)) = (modified(source), modified(output)) else {
        return false;
    };
    out >= src
}

fn modified(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}
