//! File system scanner for source images.
//!
//! Recursively scans directories for raster files the converter can read.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extensions treated as convertible images.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Suffix of the preview images written by `convert --preview`.
const PREVIEW_SUFFIX: &str = ".preview.png";

/// A discovered source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Path to read the image from.
    pub path: PathBuf,
    /// Path relative to the scanned root (file name for explicit inputs),
    /// mirrored under the output directory.
    pub relative: PathBuf,
}

impl SourceImage {
    /// Output path under `dir` with the source extension replaced by `extension`.
    pub fn output_path(&self, dir: &Path, extension: &str) -> PathBuf {
        dir.join(self.relative.with_extension(extension))
    }
}

/// Result of expanding input paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Images to convert, in input order (directories sorted by path).
    pub images: Vec<SourceImage>,
    /// Files skipped during directory scans because they look like previews.
    pub skipped_previews: Vec<PathBuf>,
}

/// Check if a path has a convertible image extension.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Check if a path is named like a preview written by a previous run.
pub fn is_preview_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.ends_with(PREVIEW_SUFFIX))
        .unwrap_or(false)
}

/// Scan a directory for image files, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::default();

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_image_path(p) && !manifest.is_excluded(p))
        .collect();
    found.sort();

    for path in found {
        if is_preview_path(&path) {
            result.skipped_previews.push(path);
            continue;
        }
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        result.images.push(SourceImage { path, relative });
    }

    result
}

/// Expand input paths: directories are scanned, files pass through.
///
/// Explicit files are taken as given, even when named like a preview.
pub fn scan_inputs(inputs: &[PathBuf], manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::default();

    for input in inputs {
        if input.is_dir() {
            let scan = scan_directory(input, manifest);
            result.images.extend(scan.images);
            result.skipped_previews.extend(scan.skipped_previews);
        } else {
            let relative = input
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| input.clone());
            result.images.push(SourceImage {
                path: input.clone(),
                relative,
            });
        }
    }

    result
}
