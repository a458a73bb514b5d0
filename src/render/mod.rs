//! Rendering module for pxsvg.
//!
//! Turns merged regions into SVG text, or back into pixels for previews.

pub mod png;
pub mod svg;

pub use png::{rasterize, write_png};
pub use svg::{render, write_svg};
