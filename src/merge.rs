//! Scan-line rectangle merging.
//!
//! Walks the grid top-to-bottom, left-to-right. Each row is cut into
//! maximal runs of one colour; a run extends the region directly above it
//! only when that region starts at the same column, has the same fill and
//! exactly the same width. Anything else starts a new region, so every
//! region stays a plain rectangle.
//!
//! This is greedy and linear, not a minimal rectangle partition.

use crate::error::Result;
use crate::sample::SampleBlock;
use crate::types::{Grid, Region};

/// Build the region list covering `grid`.
///
/// Regions are returned in creation order. A failed sample aborts the
/// whole build.
pub fn build<S: SampleBlock + ?Sized>(grid: &Grid, sampler: &S) -> Result<Vec<Region>> {
    let mut regions: Vec<Region> = Vec::new();
    if grid.is_empty() {
        return Ok(regions);
    }

    let width = grid.width();

    // Arena index of the region whose run starts at each column, for the
    // previous row and the row being scanned.
    let mut above: Vec<Option<usize>> = vec![None; width as usize];
    let mut current: Vec<Option<usize>> = vec![None; width as usize];

    for by in 0..grid.height() {
        current.fill(None);

        let mut bx = 0;
        while bx < width {
            let x_origin = bx;
            let fill = sampler.sample_block(bx, by)?;
            let mut run_width = 1;

            while bx + 1 < width && sampler.sample_block(bx + 1, by)? == fill {
                bx += 1;
                run_width += 1;
            }

            let merge_into = above[x_origin as usize].filter(|&idx| {
                let region = &regions[idx];
                region.fill == fill && region.width == run_width
            });

            let idx = match merge_into {
                Some(idx) => {
                    regions[idx].height += 1;
                    idx
                }
                None => {
                    regions.push(Region::new(fill, x_origin, by, run_width, 1));
                    regions.len() - 1
                }
            };
            current[x_origin as usize] = Some(idx);

            bx += 1;
        }

        std::mem::swap(&mut above, &mut current);
    }

    Ok(regions)
}
