//! Project configuration (pxsvg.yaml) parsing.
//!
//! The manifest holds conversion defaults: block size, output directory,
//! preview settings and exclude patterns. CLI flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PxError, Result};

/// Block size used when neither the manifest nor the CLI sets one.
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

/// Project manifest loaded from pxsvg.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source pixels per output block.
    #[serde(default = "default_block_size")]
    pub block_size: u32,

    /// Output directory for generated SVGs.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Also write a PNG preview next to each SVG.
    #[serde(default)]
    pub preview: bool,

    /// Preview pixels per block (defaults to the block size).
    #[serde(default)]
    pub scale: Option<u32>,

    /// Patterns to exclude when scanning directories.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_block_size() -> u32 {
    DEFAULT_BLOCK_SIZE
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            output: default_output(),
            preview: false,
            scale: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a pxsvg.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    ///
    /// A zero block size is rejected here so it never reaches sampling.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| PxError::Parse {
                message: format!("Invalid manifest: {}", e),
                help: Some("Check pxsvg.yaml syntax".to_string()),
            })?
        };

        if manifest.block_size == 0 {
            return Err(PxError::InvalidConfiguration {
                message: "block_size in pxsvg.yaml must be positive".to_string(),
                help: Some("Set block_size to 1 or more".to_string()),
            });
        }

        Ok(manifest)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Preview scale, falling back to one source pixel per pixel.
    pub fn effective_scale(&self, block_size: u32) -> u32 {
        self.scale.unwrap_or(block_size).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.block_size, DEFAULT_BLOCK_SIZE);
        assert!(!manifest.preview);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
block_size: 4
output: dist/vectors
preview: true
scale: 8
excludes:
  - "*.bak.png"
  - "**/raw/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.block_size, 4);
        assert_eq!(manifest.output, PathBuf::from("dist/vectors"));
        assert!(manifest.preview);
        assert_eq!(manifest.scale, Some(8));
        assert_eq!(manifest.excludes, vec!["*.bak.png", "**/raw/*"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.block_size, 10);
    }

    #[test]
    fn test_parse_zero_block_size() {
        let err = Manifest::parse("block_size: 0").unwrap_err();
        assert!(matches!(err, PxError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_parse_negative_block_size() {
        assert!(matches!(
            Manifest::parse("block_size: -3"),
            Err(PxError::Parse { .. })
        ));
    }

    #[test]
    fn test_effective_scale() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_scale(6), 6);

        manifest.scale = Some(2);
        assert_eq!(manifest.effective_scale(6), 2);

        manifest.scale = Some(0);
        assert_eq!(manifest.effective_scale(6), 1);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak.png".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("art/logo.bak.png")));
        assert!(!manifest.is_excluded(Path::new("art/logo.png")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/raw/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("raw/a.png")));
        assert!(manifest.is_excluded(Path::new("art/raw/b.png")));
        assert!(!manifest.is_excluded(Path::new("art/final/b.png")));
    }
}
