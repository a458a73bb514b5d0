//! Rectangular output regions.

use serde::Serialize;

use super::Colour;

/// An axis-aligned rectangle of same-coloured blocks.
///
/// Position and size are in block units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub fill: Colour,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(fill: Colour, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            fill,
            x,
            y,
            width,
            height,
        }
    }

    /// Number of blocks covered.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a block coordinate lies inside this region.
    pub fn contains(&self, bx: u32, by: u32) -> bool {
        bx >= self.x && bx < self.x + self.width && by >= self.y && by < self.y + self.height
    }
}
