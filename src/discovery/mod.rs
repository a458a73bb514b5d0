//! Configuration and input discovery for pxsvg.
//!
//! Finds the `pxsvg.yaml` manifest (explicit path or working directory) and
//! expands input paths into the list of images to convert.
//!
//! # Example
//!
//! ```ignore
//! use pxsvg::discovery::{load_manifest, scan_inputs};
//!
//! let manifest = load_manifest(None)?;
//! let scan = scan_inputs(&[PathBuf::from("art")], &manifest);
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{PxError, Result};

pub use manifest::{Manifest, DEFAULT_BLOCK_SIZE};
pub use scanner::{is_image_path, is_preview_path, scan_directory, scan_inputs, ScanResult, SourceImage};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "pxsvg.yaml";

/// Load the manifest.
///
/// An explicit path must exist. Without one, `pxsvg.yaml` in the current
/// directory is used when present, otherwise defaults apply.
pub fn load_manifest(explicit: Option<&Path>) -> Result<Manifest> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PxError::Io {
                    path: path.to_path_buf(),
                    message: "Config file not found".to_string(),
                });
            }
            Manifest::load(path)
        }
        None => load_manifest_in(&PathBuf::from(".")),
    }
}

/// Load `pxsvg.yaml` from a directory, or defaults if it has none.
pub fn load_manifest_in(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILENAME);
    if path.exists() {
        Manifest::load(&path)
    } else {
        Ok(Manifest::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest_in_missing() {
        let dir = tempdir().unwrap();
        let manifest = load_manifest_in(dir.path()).unwrap();
        assert_eq!(manifest.block_size, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn test_load_manifest_in_present() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "block_size: 3\n").unwrap();
        let manifest = load_manifest_in(dir.path()).unwrap();
        assert_eq!(manifest.block_size, 3);
    }

    #[test]
    fn test_load_manifest_explicit_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(matches!(
            load_manifest(Some(&path)),
            Err(PxError::Io { .. })
        ));
    }

    #[test]
    fn test_load_manifest_explicit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "output: out\npreview: true\n").unwrap();
        let manifest = load_manifest(Some(&path)).unwrap();
        assert!(manifest.preview);
        assert_eq!(manifest.output, PathBuf::from("out"));
    }
}
