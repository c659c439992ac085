// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use ext_counter_infra::{DEFAULT_REPORT_NAME, config::DEFAULT_CONFIG_FILE};
use ext_counter_shared_kernel::{ConfigurationError, Result};

const MAX_JOBS: usize = 512;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ext_counter",
    version = crate::VERSION,
    about = "Counts distinct files per extension from a JSON-lines listing"
)]
pub struct Args {
    /// JSON file providing `file-location` and `file-name`
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, value_hint = ValueHint::FilePath)]
    pub config: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Worker threads for parsing and aggregation (1-512, default: logical CPUs)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Report file name, created inside the input directory
    #[arg(long, default_value = DEFAULT_REPORT_NAME)]
    pub output_name: String,
}

impl Args {
    /// Effective worker count.
    ///
    /// # Errors
    ///
    /// Returns `Err` when `--jobs` is outside 1..=512.
    pub fn resolved_jobs(&self) -> Result<usize> {
        validate_jobs("--jobs", self.jobs)?;
        Ok(self.jobs.unwrap_or_else(num_cpus::get))
    }
}

pub fn validate_jobs(flag: &str, jobs: Option<usize>) -> Result<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(ConfigurationError::InvalidValue {
            setting: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }
        .into()),
        _ => Ok(()),
    }
}
