//! End-to-end conversion: sample, merge, and hand back regions ready to
//! serialize.

use crate::error::Result;
use crate::merge;
use crate::render;
use crate::sample::{BlockSampler, PixelSource};
use crate::types::{Grid, Region};

/// The result of vectorizing one source image.
#[derive(Debug, Clone, PartialEq)]
pub struct Vectorized {
    pub grid: Grid,
    pub regions: Vec<Region>,
}

impl Vectorized {
    /// Serialize as an SVG document.
    pub fn to_svg(&self) -> String {
        render::render(&self.regions, &self.grid)
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn block_count(&self) -> u64 {
        self.grid.block_count()
    }
}

/// Vectorize a pixel source at the given block size.
pub fn vectorize<S: PixelSource + ?Sized>(source: &S, block_size: u32) -> Result<Vectorized> {
    let sampler = BlockSampler::new(source, block_size)?;
    let grid = sampler.grid();
    let regions = merge::build(&grid, &sampler)?;
    Ok(Vectorized { grid, regions })
}
