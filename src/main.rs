// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use ext_counter::cli::Args;
use ext_counter_infra::logging;
use log::error;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = logging::parse_level(&args.log_level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{}', defaulting to INFO.", args.log_level);
        logging::DEFAULT_LEVEL
    });
    if let Err(err) = logging::init(level) {
        eprintln!("Failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    match ext_counter::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("The application has encountered an error. Details: {err:#}");
            ExitCode::FAILURE
        }
    }
}
