//! Raster preview of merged regions.
//!
//! Paints regions back into pixels so a conversion can be compared with its
//! source at a glance.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{PxError, Result};
use crate::types::{Grid, Region};

/// Paint regions into an image at `scale` pixels per block.
///
/// A scale of 0 is treated as 1. Blocks not covered by any region stay
/// transparent. Fails with `InvalidConfiguration` when the scaled image
/// would not fit in `u32` dimensions.
pub fn rasterize(regions: &[Region], grid: &Grid, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let width = scaled(grid.width(), scale)?;
    let height = scaled(grid.height(), scale)?;
    let mut img = RgbaImage::new(width, height);

    for region in regions {
        let rgba = Rgba(region.fill.normalized().to_rgba());
        let x0 = scaled(region.x, scale)?.min(width);
        let y0 = scaled(region.y, scale)?.min(height);
        let x1 = scaled(region.x.saturating_add(region.width), scale)?.min(width);
        let y1 = scaled(region.y.saturating_add(region.height), scale)?.min(height);

        for py in y0..y1 {
            for px in x0..x1 {
                img.put_pixel(px, py, rgba);
            }
        }
    }

    Ok(img)
}

fn scaled(blocks: u32, scale: u32) -> Result<u32> {
    blocks
        .checked_mul(scale)
        .ok_or_else(|| PxError::InvalidConfiguration {
            message: format!("preview scale {} is too large for a {} block image", scale, blocks),
            help: Some("Use a smaller --scale".to_string()),
        })
}

/// Write a preview image to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
