//! pxsvg - Raster to rectangle SVG converter
//!
//! Samples an image on a grid of fixed-size blocks, merges same-coloured
//! blocks into rectangles with a greedy scan-line pass, and serializes the
//! rectangles as a compact SVG.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod sample;
pub mod types;

pub use discovery::{load_manifest, Manifest, MANIFEST_FILENAME};
pub use error::{PxError, Result};
pub use merge::build;
pub use pipeline::{vectorize, Vectorized};
pub use render::{rasterize, render, write_png, write_svg};
pub use sample::{BlockSampler, PixelSource, SampleBlock};
pub use types::{Colour, Grid, Region};
