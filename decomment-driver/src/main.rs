//! decomment driver
//!
//! Builds the run configuration from defaults, an optional config file and
//! command-line flags, then rewrites every matching file under the root.
//! Per-file failures are reported and do not affect the exit status.

mod cli;
mod reporter;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use decomment_common::StripConfig;
use decomment_strip::Walker;
use log::{info, warn};
use reporter::ConsoleReporter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let base = match &cli.config {
        Some(path) => StripConfig::load(path)
            .with_context(|| format!("Could not load configuration from {}", path.display()))?,
        None => StripConfig::default(),
    };
    let config = cli.apply(base);

    info!(
        "Stripping comments under {} ({})",
        config.root.display(),
        config.extensions.join(", ")
    );
    if !config.root.is_dir() {
        warn!("{} is not a directory, nothing to do", config.root.display());
    }

    let mut reporter = ConsoleReporter::new(config.dry_run);
    let walker = Walker::new(config);
    let summary = walker.run(&mut reporter);
    reporter.print_summary(&summary);

    Ok(())
}
