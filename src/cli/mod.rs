pub mod completions;
pub mod convert;
pub mod regions;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use image::RgbaImage;

use crate::error::{PxError, Result};

/// pxsvg - Convert raster images into compact rectangle SVGs
#[derive(Parser, Debug)]
#[command(name = "pxsvg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a pxsvg.yaml config (default: ./pxsvg.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print extra detail about each conversion
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert images into SVG files
    Convert(convert::ConvertArgs),

    /// Print the merged region list of an image as JSON
    Regions(regions::RegionsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Decode an image file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(PxError::Io {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })
}
