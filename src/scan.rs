//! Source-tree discovery and output path mapping.
//!
//! Walks the source directory recursively and yields every qualifying image
//! together with the output path it maps to. A file qualifies when its
//! extension (case-insensitive) is on the fixed allowlist. The mapping
//! mirrors the relative path under the target root with the extension
//! replaced by `webp`:
//!
//! ```text
//! source/               target/
//! ├── a.jpg         →   ├── a.webp
//! └── nested/           └── nested/
//!     └── b.PNG     →       └── b.webp
//! ```
//!
//! Discovery only looks at names — no file is opened here. Entries the
//! walker cannot stat are skipped.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions that qualify a file for processing (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Extension given to every output file.
pub const OUTPUT_EXTENSION: &str = "webp";

/// A qualifying source image together with its mirrored output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Absolute (or caller-relative) path of the source file.
    pub source: PathBuf,
    /// Path relative to the source root; used in progress lines.
    pub relative: PathBuf,
    /// Mapped output path under the target root.
    pub output: PathBuf,
}

/// Whether a path's extension is on the allowlist (case-insensitive).
pub fn qualifies(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Map a source-relative path to its output path under `target_root`.
pub fn map_output(relative: &Path, target_root: &Path) -> PathBuf {
    target_root.join(relative.with_extension(OUTPUT_EXTENSION))
}

/// Collect every qualifying image under `source_root`, in sorted walk order.
///
/// Walk order is deterministic for tests but is not part of the contract.
pub fn discover(source_root: &Path, target_root: &Path) -> Vec<SourceImage> {
    WalkDir::new(source_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| qualifies(entry.path()))
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(source_root).ok()?.to_path_buf();
            Some(SourceImage {
                source: entry.path().to_path_buf(),
                output: map_output(&relative, target_root),
                relative,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // =========================================================================
    // Allowlist
    // =========================================================================

    #[test]
    fn qualifies_allowlisted_extensions() {
        for name in ["a.png", "a.jpg", "a.jpeg", "a.webp"] {
            assert!(qualifies(Path::new(name)), "{name} should qualify");
        }
    }

    #[test]
    fn qualifies_is_case_insensitive() {
        for name in ["a.PNG", "a.Jpg", "a.JPEG", "a.WebP"] {
            assert!(qualifies(Path::new(name)), "{name} should qualify");
        }
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["a.txt", "a.gif", "a.tiff", "a.mp4", "a", "jpg"] {
            assert!(!qualifies(Path::new(name)), "{name} should not qualify");
        }
    }

    // =========================================================================
    // Path mapping
    // =========================================================================

    #[test]
    fn map_output_replaces_extension() {
        assert_eq!(
            map_output(Path::new("a.jpg"), Path::new("target")),
            PathBuf::from("target/a.webp")
        );
    }

    #[test]
    fn map_output_preserves_nested_path() {
        assert_eq!(
            map_output(Path::new("sub/dir/photo.jpeg"), Path::new("out")),
            PathBuf::from("out/sub/dir/photo.webp")
        );
    }

    #[test]
    fn map_output_keeps_webp_name() {
        assert_eq!(
            map_output(Path::new("b.webp"), Path::new("target")),
            PathBuf::from("target/b.webp")
        );
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    #[test]
    fn discover_finds_nested_qualifying_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.jpg"), "x").unwrap();
        fs::create_dir_all(tmp.path().join("sub/deep")).unwrap();
        fs::write(tmp.path().join("sub/deep/b.png"), "x").unwrap();

        let images = discover(tmp.path(), Path::new("target"));

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].relative, PathBuf::from("a.jpg"));
        assert_eq!(images[0].output, PathBuf::from("target/a.webp"));
        assert_eq!(images[1].relative, PathBuf::from("sub/deep/b.png"));
        assert_eq!(images[1].output, PathBuf::from("target/sub/deep/b.webp"));
    }

    #[test]
    fn discover_skips_non_qualifying_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        fs::write(tmp.path().join("clip.mp4"), "x").unwrap();
        fs::write(tmp.path().join("photo.jpg"), "x").unwrap();

        let images = discover(tmp.path(), Path::new("target"));

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].relative, PathBuf::from("photo.jpg"));
    }

    #[test]
    fn discover_ignores_directories_named_like_images() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gallery.jpg")).unwrap();
        fs::write(tmp.path().join("gallery.jpg/real.png"), "x").unwrap();

        let images = discover(tmp.path(), Path::new("target"));

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].relative, PathBuf::from("gallery.jpg/real.png"));
    }

    #[test]
    fn discover_empty_tree_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(discover(tmp.path(), Path::new("target")).is_empty());
    }

    #[test]
    fn discover_source_paths_point_at_real_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.webp"), "x").unwrap();

        let images = discover(tmp.path(), Path::new("target"));

        assert_eq!(images.len(), 1);
        assert!(images[0].source.exists());
        assert_eq!(images[0].source, tmp.path().join("a.webp"));
    }
}
