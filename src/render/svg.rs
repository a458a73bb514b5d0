//! SVG serialization of merged regions.
//!
//! Output is a single line: one `<svg>` root with a `viewBox` in block
//! units and one `<rect>` per region, in input order.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::{PxError, Result};
use crate::types::{Grid, Region};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Render regions as an SVG document.
///
/// Zero-area regions are skipped.
pub fn render(regions: &[Region], grid: &Grid) -> String {
    // Rough per-rect size keeps reallocations down on large grids
    let mut out = String::with_capacity(160 + regions.len() * 64);

    // writing to a String is infallible
    let _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}" viewBox="0 0 {} {}">"#,
        grid.width(),
        grid.height()
    );

    for region in regions.iter().filter(|r| !r.is_empty()) {
        let _ = write!(
            out,
            r#"<rect width="{}" height="{}" x="{}" y="{}" fill="{}"/>"#,
            region.width, region.height, region.x, region.y, region.fill
        );
    }

    out.push_str("</svg>");
    out
}

/// Write an SVG document to disk.
pub fn write_svg(svg: &str, path: &Path) -> Result<()> {
    fs::write(path, svg).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}
