use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

/// Command-line arguments for crossselect
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Enhance a page's multi-selects and replay input against it")]
pub struct Args {
    /// Page description: a JSON element tree
    pub page: PathBuf,

    /// Widget options as JSON (defaults to the admin form settings)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// JSON array of input events to dispatch after enhancing
    #[arg(long = "events")]
    pub events: Option<PathBuf>,

    /// Write the resulting HTML here instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Log file (defaults to latest.log in the cache directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// More log output; repeat for more detail
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
