//! CLI logic for the Cellpack battery pack generator.
//!
//! This module contains the core CLI logic: loading the configuration,
//! applying command-line overrides, building the pack and writing the SVG.

pub mod config;
pub mod error_adapter;

mod args;

pub use args::Args;

use std::fs;

use log::{debug, info};

use cellpack::{
    CellpackError, PackBuilder,
    config::{AppConfig, PackConfig},
};

/// Run the Cellpack CLI application
///
/// This function builds the pack described by the configuration and the
/// command-line overrides, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CellpackError` for:
/// - File I/O errors
/// - Configuration loading or saving errors
/// - Invalid pack parameters
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CellpackError> {
    info!(output_path = args.output; "Generating battery pack");

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = apply_overrides(app_config, args);

    let builder = PackBuilder::new(app_config);
    let pack = builder.build()?;
    info!(name = pack.name(), cells = pack.cell_count(); "Pack built");

    let svg = builder.render_svg(&pack)?;

    // Saved only once both the pack and its style have been accepted
    if let Some(path) = &args.save_config {
        config::save_config(path, builder.config())?;
    }

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Replace configured values with the ones given on the command line.
fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut pack: PackConfig = config.pack().clone();

    if let Some(diameter) = args.diameter {
        debug!(diameter; "Overriding cell diameter");
        pack = pack.with_cell_diameter(diameter);
    }
    if let Some(height) = args.height {
        debug!(height; "Overriding cell height");
        pack = pack.with_cell_height(height);
    }
    if let Some(spacing) = args.spacing {
        debug!(spacing; "Overriding cell spacing");
        pack = pack.with_cell_spacing(spacing);
    }
    if let Some(series) = args.series {
        debug!(series; "Overriding series count");
        pack = pack.with_series_count(series);
    }
    if let Some(parallel) = args.parallel {
        debug!(parallel; "Overriding parallel count");
        pack = pack.with_parallel_count(parallel);
    }
    if let Some(stagger) = args.stagger {
        debug!(stagger:?; "Overriding stagger mode");
        pack = pack.with_stagger(stagger);
    }

    let mut style = config.style().clone();
    if args.labels {
        style = style.with_label_cells(true);
    }

    AppConfig::new(pack, style)
}
