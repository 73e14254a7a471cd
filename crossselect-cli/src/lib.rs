//! Batch driver for cross-select pages: load a page description, enhance
//! it, replay scripted input and emit the resulting markup.

pub mod cli;
pub mod paths;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crossdom::Event;
use crossselect::{CrossSelectConfig, EnhanceReport, Error, Page, PageError};
use simplelog::{Config, WriteLogger};

pub use cli::Args;

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub report: EnhanceReport,
    /// Navigation requests made by the replayed input, in order.
    pub navigations: Vec<String>,
    pub html: String,
}

/// Start logging to `args.log_file`, or the cache directory's log file.
/// Returns the file in use, or None if no log file could be opened.
pub fn init_logging(args: &Args) -> Option<PathBuf> {
    let path = args.log_file.clone().or_else(paths::log_file)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;
    WriteLogger::init(args.log_level(), Config::default(), file).ok()?;
    Some(path)
}

pub fn load_config(path: Option<&Path>) -> Result<CrossSelectConfig, Error> {
    match path {
        Some(path) => Ok(CrossSelectConfig::from_json(&fs::read_to_string(path)?)?),
        None => Ok(CrossSelectConfig::admin_defaults()),
    }
}

pub fn load_events(path: Option<&Path>) -> Result<Vec<Event>, Error> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = fs::read_to_string(path)?;
    let events = serde_json::from_str(&text).map_err(PageError::from)?;
    Ok(events)
}

/// Load, enhance and replay as `args` describe.
pub fn run(args: &Args) -> Result<RunOutput, Error> {
    let config = load_config(args.config.as_deref())?;
    let events = load_events(args.events.as_deref())?;

    let mut page = Page::from_json(&fs::read_to_string(&args.page)?)?;
    let report = page.enhance(config);
    log::info!("[cli] replaying {} events", events.len());
    let navigations = page.replay(&events);

    Ok(RunOutput {
        report,
        navigations,
        html: page.to_html(),
    })
}

/// Write the markup to the output file, or stdout.
pub fn write_output(args: &Args, output: &RunOutput) -> Result<(), Error> {
    match &args.output {
        Some(path) => fs::write(path, &output.html)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
