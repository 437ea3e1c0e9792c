//! CLI output formatting.
//!
//! One line per file outcome while the walk runs, a header before it and a
//! fixed-format summary block after it:
//!
//! ```text
//! Source: photos/originals
//! Target: photos/optimized
//! ============================================================
//! optimized a.jpg (83.4% smaller)
//! optimized nested/b.png (41.0% smaller)
//! skipped c.webp
//! error broken.jpg: Failed to decode photos/originals/broken.jpg: ...
//! ============================================================
//! Summary
//! ============================================================
//! Processed: 2
//! Skipped:   1
//! Errors:    1
//! ============================================================
//! ```
//!
//! Each piece has a `format_*` function (pure — no I/O, no side effects)
//! and a `print_*` wrapper that writes to stdout, so formatting is unit
//! testable without capturing process output.

use crate::optimize::{FileEvent, RunSummary};
use std::path::Path;

const RULE: &str = "============================================================";

/// Format one per-file outcome line.
pub fn format_file_event(event: &FileEvent) -> String {
    match event {
        FileEvent::Optimized {
            relative,
            reduction_pct,
        } => format!(
            "optimized {} ({:.1}% smaller)",
            relative.display(),
            reduction_pct
        ),
        FileEvent::Skipped { relative } => format!("skipped {}", relative.display()),
        FileEvent::Errored { relative, message } => {
            format!("error {}: {}", relative.display(), message)
        }
    }
}

/// Print one per-file outcome line to stdout.
pub fn print_file_event(event: &FileEvent) {
    println!("{}", format_file_event(event));
}

/// Format the run header naming both directory roots.
pub fn format_run_header(source_root: &Path, target_root: &Path) -> Vec<String> {
    vec![
        format!("Source: {}", source_root.display()),
        format!("Target: {}", target_root.display()),
        RULE.to_string(),
    ]
}

/// Print the run header to stdout.
pub fn print_run_header(source_root: &Path, target_root: &Path) {
    for line in format_run_header(source_root, target_root) {
        println!("{}", line);
    }
}

/// Format the summary block with the three run counters.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    vec![
        RULE.to_string(),
        "Summary".to_string(),
        RULE.to_string(),
        format!("Processed: {}", summary.processed),
        format!("Skipped:   {}", summary.skipped),
        format!("Errors:    {}", summary.errors),
        RULE.to_string(),
    ]
}

/// Print the summary block to stdout.
pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}
