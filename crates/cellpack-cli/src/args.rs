//! Command-line argument definitions for the Cellpack CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, per-run overrides of pack parameters, and logging verbosity.

use clap::Parser;

use cellpack::StaggerMode;

/// Command-line arguments for the Cellpack battery pack generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "pack.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of cells in series (overrides the configuration)
    #[arg(short, long, allow_negative_numbers = true)]
    pub series: Option<i64>,

    /// Number of cells in parallel (overrides the configuration)
    #[arg(short, long, allow_negative_numbers = true)]
    pub parallel: Option<i64>,

    /// Cell diameter (overrides the configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub diameter: Option<f32>,

    /// Cell height (overrides the configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f32>,

    /// Center-to-center cell spacing (overrides the configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub spacing: Option<f32>,

    /// Stagger mode: none, series or parallel (overrides the configuration)
    #[arg(long)]
    pub stagger: Option<StaggerMode>,

    /// Label every cell with its series/parallel position
    #[arg(long)]
    pub labels: bool,

    /// Write the effective configuration to this TOML file
    #[arg(long)]
    pub save_config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
