//! Block sampling over a pixel source.
//!
//! Each block is represented by its top-left pixel; there is no averaging.

use image::RgbaImage;

use crate::error::{PxError, Result};
use crate::types::{Colour, Grid};

/// A readable pixel buffer.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Read the RGBA value at `(x, y)`.
    fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4]>;
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        self.get_pixel_checked(x, y)
            .map(|p| p.0)
            .ok_or_else(|| PxError::SourceRead {
                x,
                y,
                message: "pixel not present in image buffer".to_string(),
            })
    }
}

/// Anything that can report the colour of a block.
pub trait SampleBlock {
    fn sample_block(&self, bx: u32, by: u32) -> Result<Colour>;
}

/// Samples blocks of a [`PixelSource`] at a fixed block size.
pub struct BlockSampler<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    grid: Grid,
}

impl<'a, S: PixelSource + ?Sized> BlockSampler<'a, S> {
    /// Create a sampler, deriving the grid from the source dimensions.
    ///
    /// Fails with `InvalidConfiguration` for a zero block size.
    pub fn new(source: &'a S, block_size: u32) -> Result<Self> {
        let grid = Grid::new(source.width(), source.height(), block_size)?;
        Ok(Self { source, grid })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}

impl<S: PixelSource + ?Sized> SampleBlock for BlockSampler<'_, S> {
    fn sample_block(&self, bx: u32, by: u32) -> Result<Colour> {
        if !self.grid.contains(bx, by) {
            return Err(PxError::OutOfBounds {
                x: bx,
                y: by,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        let size = self.grid.block_size();
        let (x, y) = (bx * size, by * size);
        if x >= self.source.width() || y >= self.source.height() {
            return Err(PxError::OutOfBounds {
                x,
                y,
                width: self.source.width(),
                height: self.source.height(),
            });
        }

        let rgba = self.source.pixel(x, y)?;
        Ok(Colour::from(rgba).normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// A source whose pixels can never be read.
    struct Unreadable;

    impl PixelSource for Unreadable {
        fn width(&self) -> u32 {
            4
        }

        fn height(&self) -> u32 {
            4
        }

        fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4]> {
            Err(PxError::SourceRead {
                x,
                y,
                message: "decoder gone".to_string(),
            })
        }
    }

    #[test]
    fn test_samples_top_left_pixel() {
        // 4x4 image, 2x2 blocks; only the top-left pixel of each block counts
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        img.put_pixel(2, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 255, 0, 255]));

        let sampler = BlockSampler::new(&img, 2).unwrap();
        assert_eq!(sampler.sample_block(0, 0).unwrap(), Colour::rgb(0, 0, 255));
        assert_eq!(sampler.sample_block(1, 0).unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(sampler.sample_block(0, 1).unwrap(), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_sampling_is_repeatable() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 255]));
        let sampler = BlockSampler::new(&img, 1).unwrap();
        let first = sampler.sample_block(2, 2).unwrap();
        let second = sampler.sample_block(2, 2).unwrap();
        assert_eq!(first.to_rgba(), second.to_rgba());
    }

    #[test]
    fn test_transparent_pixels_normalized() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 0]));
        let sampler = BlockSampler::new(&img, 1).unwrap();
        assert_eq!(sampler.sample_block(0, 0).unwrap().to_rgba(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_grid_floored() {
        let img = RgbaImage::new(25, 13);
        let sampler = BlockSampler::new(&img, 10).unwrap();
        assert_eq!((sampler.grid().width(), sampler.grid().height()), (2, 1));
        assert!(sampler.sample_block(1, 0).is_ok());
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let img = RgbaImage::new(4, 4);
        let err = BlockSampler::new(&img, 0).err().unwrap();
        assert!(matches!(err, PxError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_out_of_bounds() {
        let img = RgbaImage::new(4, 4);
        let sampler = BlockSampler::new(&img, 2).unwrap();
        let err = sampler.sample_block(2, 0).unwrap_err();
        assert!(matches!(err, PxError::OutOfBounds { x: 2, y: 0, .. }));
    }

    #[test]
    fn test_source_read_error_propagates() {
        let source = Unreadable;
        let sampler = BlockSampler::new(&source, 1).unwrap();
        let err = sampler.sample_block(0, 0).unwrap_err();
        assert!(matches!(err, PxError::SourceRead { .. }));
    }
}
