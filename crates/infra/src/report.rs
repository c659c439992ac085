// crates/infra/src/report.rs
use std::path::{Path, PathBuf};

use ext_counter_domain::{ExtensionCount, output};
use ext_counter_ports::report::{ReportSink, SummarySink};
use ext_counter_shared_kernel::{MalformedInputError, OutputError, Result};
use log::info;

use crate::persistence::{FileReader, FileWriter};

pub const DEFAULT_REPORT_NAME: &str = "output.csv";

/// Log target used for the per-extension summary lines.
pub const SUMMARY_TARGET: &str = "ext_counter::summary";

/// Writes the aggregate as one headerless CSV file inside `dir`.
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    dir: PathBuf,
    file_name: String,
}

impl CsvReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_file_name(dir, DEFAULT_REPORT_NAME)
    }

    pub fn with_file_name(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { dir: dir.into(), file_name: file_name.into() }
    }

    pub fn target(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl ReportSink for CsvReportWriter {
    fn write(&self, counts: &[ExtensionCount]) -> Result<PathBuf> {
        if !self.dir.is_dir() {
            return Err(OutputError::DirectoryMissing { path: self.dir.clone() }.into());
        }

        let path = self.target();
        let body = output::render_csv(counts)?;
        FileWriter::atomic_write(&path, &body)
            .map_err(|source| OutputError::Write { path: path.clone(), source })?;

        info!("wrote {} extension rows to {}", counts.len(), path.display());
        Ok(path)
    }
}

/// Reads a report produced by [`CsvReportWriter`].
pub fn read_report(path: &Path) -> Result<Vec<ExtensionCount>> {
    let content = FileReader::read_to_string(path)
        .map_err(|source| MalformedInputError::Open { path: path.to_path_buf(), source })?;
    Ok(output::parse_csv(&content)?)
}

/// Emits `<extension>: <count>` at info level, one record per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSummarySink;

impl SummarySink for LogSummarySink {
    fn emit(&self, counts: &[ExtensionCount]) {
        for count in counts {
            info!(target: SUMMARY_TARGET, "{}", output::summary_line(count));
        }
    }
}
