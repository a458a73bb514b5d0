//! Colour type and SVG fill formatting.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// An RGBA colour value.
///
/// Every colour with `a == 0` compares (and hashes) equal to
/// [`Colour::TRANSPARENT`], whatever its RGB channels hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Collapse any fully transparent colour to [`Colour::TRANSPARENT`].
    pub fn normalized(self) -> Self {
        if self.is_transparent() {
            Self::TRANSPARENT
        } else {
            self
        }
    }

    /// SVG `fill` attribute value.
    ///
    /// `transparent`, `#rrggbb` for opaque colours, `#rrggbbaa` otherwise.
    pub fn svg_fill(self) -> String {
        self.to_string()
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().to_rgba() == other.normalized().to_rgba()
    }
}

impl Eq for Colour {}

impl Hash for Colour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().to_rgba().hash(state);
    }
}

impl From<[u8; 4]> for Colour {
    fn from(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            f.write_str("transparent")
        } else if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
