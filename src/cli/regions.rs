//! Regions command implementation.
//!
//! Prints the merged region list of one image as JSON on stdout, for
//! tooling that wants the rectangles without SVG markup.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::Manifest;
use crate::error::{PxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{vectorize, Vectorized};
use crate::types::{Grid, Region};

use super::load_image;

/// Print the merged region list of an image as JSON
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Image file to analyze
    #[arg(required = true)]
    pub input: PathBuf,

    /// Source pixels per block (default: 10, or block_size from pxsvg.yaml)
    #[arg(long, short)]
    pub block_size: Option<u32>,
}

/// JSON document printed by the regions command.
#[derive(Debug, Serialize)]
pub struct RegionReport<'a> {
    pub grid: &'a Grid,
    pub regions: &'a [Region],
}

impl<'a> From<&'a Vectorized> for RegionReport<'a> {
    fn from(result: &'a Vectorized) -> Self {
        Self {
            grid: &result.grid,
            regions: &result.regions,
        }
    }
}

pub fn run(args: RegionsArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let json = regions_json(&args, manifest, printer)?;
    println!("{}", json);
    Ok(())
}

/// Build the pretty-printed JSON report for `args.input`.
pub fn regions_json(args: &RegionsArgs, manifest: &Manifest, printer: &Printer) -> Result<String> {
    let block_size = Grid::check_block_size(args.block_size.unwrap_or(manifest.block_size))?;
    let img = load_image(&args.input)?;
    let result = vectorize(&img, block_size)?;

    printer.status(
        "Analyzed",
        &format!(
            "{} ({})",
            display_path(&args.input),
            plural(result.region_count(), "region", "regions")
        ),
    );

    serde_json::to_string_pretty(&RegionReport::from(&result)).map_err(|e| PxError::Build {
        message: format!("Failed to serialize regions: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn test_regions_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("stripe.png");
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        img.put_pixel(0, 1, Rgba([17, 34, 51, 255]));
        img.put_pixel(1, 1, Rgba([17, 34, 51, 255]));
        img.save(&input).unwrap();

        let args = RegionsArgs {
            input,
            block_size: Some(1),
        };
        let json = regions_json(&args, &Manifest::default(), &Printer::new()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({
                "grid": { "width": 2, "height": 2, "block_size": 1 },
                "regions": [
                    { "fill": "transparent", "x": 0, "y": 0, "width": 2, "height": 1 },
                    { "fill": "#112233", "x": 0, "y": 1, "width": 2, "height": 1 }
                ]
            })
        );
    }

    #[test]
    fn test_regions_uses_manifest_block_size() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("solid.png");
        RgbaImage::from_pixel(8, 4, Rgba([255, 255, 255, 255]))
            .save(&input)
            .unwrap();

        let manifest = Manifest {
            block_size: 2,
            ..Default::default()
        };
        let args = RegionsArgs {
            input,
            block_size: None,
        };
        let json = regions_json(&args, &manifest, &Printer::new()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["grid"]["width"], 4);
        assert_eq!(value["regions"].as_array().unwrap().len(), 1);
    }
}
