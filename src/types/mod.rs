//! Core domain types for pxsvg.
//!
//! - `Colour` - RGBA colour values with transparent normalization
//! - `Grid` - Block grid over a source image
//! - `Region` - Merged rectangle of same-coloured blocks

mod colour;
mod grid;
mod region;

pub use colour::Colour;
pub use grid::Grid;
pub use region::Region;
