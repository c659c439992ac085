use anyhow::{Context, Result};
use ext_counter_infra::{AppConfig, CsvReportWriter, JsonLinesSource, LogSummarySink};
use ext_counter_usecase::{CountExtensions, CountExtensionsOutput, PipelineContext};
use log::info;

use crate::cli::Args;

/// Loads configuration, wires the adapters and runs the pipeline once.
///
/// # Errors
///
/// Returns `Err` for configuration problems (before any input is read),
/// malformed input, and report write failures.
pub fn run(args: &Args) -> Result<CountExtensionsOutput> {
    let config = AppConfig::load(&args.config)
        .with_context(|| format!("application configuration could not be loaded from '{}'", args.config.display()))?;
    config.ensure_input_exists()?;
    let jobs = args.resolved_jobs()?;

    info!("The application has started...");
    info!("input: {}, jobs={jobs}", config.input_path().display());

    let source = JsonLinesSource::new(config.input_path());
    let writer = CsvReportWriter::with_file_name(config.output_dir(), &args.output_name);
    let summary = LogSummarySink;

    let output = CountExtensions::new(&source, &writer, &summary)
        .run(&PipelineContext::new(jobs))
        .context("file extension count failed")?;

    info!(
        "The application has completed: {} records, {} distinct, {} extensions -> {}",
        output.raw_records,
        output.distinct_records,
        output.counts.len(),
        output.report_path.display()
    );
    Ok(output)
}
