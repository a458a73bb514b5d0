//! Convert command implementation.
//!
//! Loads images, merges their blocks into rectangles and writes SVG files
//! (plus optional PNG previews).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{RecursiveMode, Watcher};

use crate::discovery::{is_image_path, scan_inputs, Manifest, SourceImage};
use crate::error::{PxError, Result};
use crate::output::{display_path, kilobytes, plural, Printer};
use crate::pipeline::vectorize;
use crate::render::{rasterize, write_png, write_svg};
use crate::types::Grid;

use super::load_image;

/// Convert images into SVG files
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image files or directories to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Source pixels per block (default: 10, or block_size from pxsvg.yaml)
    #[arg(long, short)]
    pub block_size: Option<u32>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write a PNG preview of each result
    #[arg(long)]
    pub preview: bool,

    /// Preview pixels per block (default: the block size)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Print the SVG to stdout instead of writing a file (single input only)
    #[arg(long, conflicts_with_all = ["watch", "preview"])]
    pub stdout: bool,

    /// Re-convert inputs whenever they change
    #[arg(long)]
    pub watch: bool,
}

/// Effective settings after merging CLI flags over the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub block_size: u32,
    pub output: PathBuf,
    pub preview: bool,
    pub scale: u32,
}

impl ConvertSettings {
    pub fn resolve(args: &ConvertArgs, manifest: &Manifest) -> Result<Self> {
        let block_size = Grid::check_block_size(args.block_size.unwrap_or(manifest.block_size))?;
        let scale = match args.scale {
            Some(scale) => scale.max(1),
            None => manifest.effective_scale(block_size),
        };

        Ok(Self {
            block_size,
            output: args.output.clone().unwrap_or_else(|| manifest.output.clone()),
            preview: args.preview || manifest.preview,
            scale,
        })
    }
}

/// Files written for one converted image.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub svg_path: PathBuf,
    pub preview_path: Option<PathBuf>,
    pub regions: usize,
    pub bytes: usize,
}

pub fn run(args: ConvertArgs, manifest: &Manifest, printer: &Printer) -> Result<Vec<ConvertedFile>> {
    let settings = ConvertSettings::resolve(&args, manifest)?;
    let scan = scan_inputs(&args.inputs, manifest);

    for preview in &scan.skipped_previews {
        printer.verbose(
            "Skipping",
            &format!("{} (named like a preview)", display_path(preview)),
        );
    }

    let images = scan.images;
    if images.is_empty() {
        return Err(PxError::Build {
            message: "No images found".to_string(),
            help: Some("Pass image files or directories containing .png/.jpg files".to_string()),
        });
    }

    if args.stdout {
        if images.len() != 1 {
            return Err(PxError::Build {
                message: format!("--stdout needs exactly one image, got {}", images.len()),
                help: None,
            });
        }
        let img = load_image(&images[0].path)?;
        let result = vectorize(&img, settings.block_size)?;
        println!("{}", result.to_svg());
        return Ok(vec![]);
    }

    check_output_collisions(&images, &settings.output)?;

    if !settings.output.exists() {
        fs::create_dir_all(&settings.output).map_err(|e| PxError::Io {
            path: settings.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut converted = Vec::with_capacity(images.len());
    for source in &images {
        converted.push(convert_file(source, &settings, printer)?);
    }

    let total_bytes: usize = converted.iter().map(|c| c.bytes).sum();
    printer.success(
        "Finished",
        &format!(
            "{} to {} ({})",
            plural(converted.len(), "image", "images"),
            display_path(&settings.output),
            kilobytes(total_bytes)
        ),
    );

    if args.watch {
        watch(&images, &settings, printer)?;
    }

    Ok(converted)
}

/// Fail before writing anything if two inputs map to the same SVG path.
fn check_output_collisions(images: &[SourceImage], output: &Path) -> Result<()> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    for source in images {
        let svg_path = source.output_path(output, "svg");
        if let Some(first) = seen.insert(svg_path.clone(), &source.path) {
            return Err(PxError::Build {
                message: format!(
                    "{} and {} would both be written to {}",
                    display_path(first),
                    display_path(&source.path),
                    display_path(&svg_path)
                ),
                help: Some("Rename one of the inputs or convert them separately".to_string()),
            });
        }
    }
    Ok(())
}

/// Convert a single image and write its outputs.
pub fn convert_file(
    source: &SourceImage,
    settings: &ConvertSettings,
    printer: &Printer,
) -> Result<ConvertedFile> {
    let display = display_path(&source.path);
    let img = load_image(&source.path)?;

    printer.status(
        "Converting",
        &format!("{} ({}x{} px)", display, img.width(), img.height()),
    );

    let result = vectorize(&img, settings.block_size)?;
    let grid = result.grid;

    if grid.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "{} is smaller than one {}px block; output is empty",
                display, settings.block_size
            ),
        );
    } else if img.width() % settings.block_size != 0 || img.height() % settings.block_size != 0 {
        printer.verbose(
            "Cropped",
            &format!("partial blocks dropped at the right/bottom edge of {}", display),
        );
    }

    printer.verbose(
        "Merged",
        &format!(
            "{}x{} grid: {} blocks into {}",
            grid.width(),
            grid.height(),
            result.block_count(),
            plural(result.region_count(), "region", "regions")
        ),
    );

    let svg = result.to_svg();
    let svg_path = source.output_path(&settings.output, "svg");
    create_parent(&svg_path)?;
    write_svg(&svg, &svg_path)?;

    let preview_path = if settings.preview {
        let preview = rasterize(&result.regions, &grid, settings.scale)?;
        let preview_path = source.output_path(&settings.output, "preview.png");
        write_png(&preview, &preview_path)?;
        printer.verbose("Preview", &display_path(&preview_path));
        Some(preview_path)
    } else {
        None
    };

    printer.info(
        "Wrote",
        &format!(
            "{} ({}, {})",
            display_path(&svg_path),
            plural(result.region_count(), "region", "regions"),
            kilobytes(svg.len())
        ),
    );

    Ok(ConvertedFile {
        svg_path,
        preview_path,
        regions: result.region_count(),
        bytes: svg.len(),
    })
}

fn create_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|e| PxError::Io {
        path: parent.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

/// Block on file system events, re-converting inputs as they change.
fn watch(images: &[SourceImage], settings: &ConvertSettings, printer: &Printer) -> Result<()> {
    // Editors often replace files on save, so watch parent directories and
    // match events back to inputs.
    let mut inputs: HashMap<PathBuf, &SourceImage> = HashMap::new();
    for source in images {
        let canonical = source.path.canonicalize().map_err(|e| PxError::Io {
            path: source.path.clone(),
            message: format!("Failed to resolve path: {}", e),
        })?;
        inputs.insert(canonical, source);
    }

    let (tx, rx) = mpsc::channel::<notify::Result<notify::Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;

    let mut dirs: Vec<&Path> = inputs.keys().filter_map(|p| p.parent()).collect();
    dirs.sort();
    dirs.dedup();
    for dir in dirs {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(watch_error)?;
    }

    printer.info(
        "Watching",
        &format!("{} (Ctrl-C to stop)", plural(inputs.len(), "image", "images")),
    );

    for event in rx {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                printer.warning("Warning", &format!("watch error: {}", e));
                continue;
            }
        };

        if !(event.kind.is_modify() || event.kind.is_create()) {
            continue;
        }

        for changed in event.paths.iter().filter(|p| is_image_path(p)) {
            let Some(source) = inputs.get(changed) else {
                continue;
            };
            if let Err(e) = convert_file(source, settings, printer) {
                printer.warning("Failed", &e.to_string());
            }
        }
    }

    Ok(())
}

fn watch_error(e: notify::Error) -> PxError {
    PxError::Build {
        message: format!("Failed to watch inputs: {}", e),
        help: None,
    }
}
