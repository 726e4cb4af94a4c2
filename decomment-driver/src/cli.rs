use clap::Parser;
use decomment_common::StripConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    about = "Strip // and /* */ comments from C-family sources in place",
    long_about = "decomment - rewrite every matching file under a directory tree with its comments removed.\n\nComment markers inside string literals are not recognized and are stripped like any other comment.",
    version
)]
pub struct Cli {
    /// Root directory to scan [default: Juego/ProyectoFinal]
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// File suffix to process, may be repeated (e.g. --ext .c --ext .h)
    #[arg(short, long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// JSON configuration file with root, extensions and dry_run fields
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report which files would change without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Layer command-line overrides on top of a base configuration
    pub fn apply(&self, mut config: StripConfig) -> StripConfig {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.extensions.is_empty() {
            config
        } else {
            config.with_extensions(self.extensions.iter().cloned())
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
