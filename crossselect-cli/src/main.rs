use std::process::ExitCode;

use clap::Parser;
use crossselect_cli::{init_logging, run, write_output, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    if init_logging(&args).is_none() {
        eprintln!("Warning: could not open a log file, logging disabled");
    }

    let output = match run(&args) {
        Ok(output) => output,
        Err(e) => {
            log::error!("[cli] {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for href in &output.navigations {
        eprintln!("navigate: {}", href);
    }
    if let Err(e) = write_output(&args, &output) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
