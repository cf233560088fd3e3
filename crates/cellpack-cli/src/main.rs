//! `cellpack` binary: parses arguments, sets up logging and reports failures.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use cellpack::CellpackError;
use cellpack_cli::{Args, error_adapter::to_reportable};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match cellpack_cli::run(&args) {
        Ok(()) => info!(output_file = args.output; "Pack generated"),
        Err(err) => {
            error!("{}", render_error(&err));
            process::exit(1);
        }
    }
}

/// Installs `env_logger` at `level`, falling back to `warn` for unknown names.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, falling back to `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();

    info!(log_level:? = filter; "Cellpack starting");
}

/// Formats `err` as a miette report, or as plain text if rendering fails.
fn render_error(err: &CellpackError) -> String {
    let mut report = String::new();
    match miette::GraphicalReportHandler::new().render_report(&mut report, &to_reportable(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}
