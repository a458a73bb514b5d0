//! Block grid derived from source dimensions and block size.

use serde::Serialize;

use crate::error::{PxError, Result};

/// Logical block grid over a source image.
///
/// Dimensions are floored, so a partial block along the right or bottom
/// edge is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    block_size: u32,
}

impl Grid {
    /// Derive a grid from source pixel dimensions.
    pub fn new(source_width: u32, source_height: u32, block_size: u32) -> Result<Self> {
        let block_size = Self::check_block_size(block_size)?;

        Ok(Self {
            width: source_width / block_size,
            height: source_height / block_size,
            block_size,
        })
    }

    /// Validate a block size, failing with `InvalidConfiguration` for zero.
    pub fn check_block_size(block_size: u32) -> Result<u32> {
        if block_size == 0 {
            return Err(PxError::InvalidConfiguration {
                message: "block size must be positive, got 0".to_string(),
                help: Some("Use --block-size with a value of at least 1".to_string()),
            });
        }
        Ok(block_size)
    }

    /// Width in blocks.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in blocks.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge length of one block in source pixels.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Total number of blocks.
    pub fn block_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if block coordinates fall inside the grid.
    pub fn contains(&self, bx: u32, by: u32) -> bool {
        bx < self.width && by < self.height
    }
}
