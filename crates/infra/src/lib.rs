// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod logging;
pub mod persistence;
pub mod report;
pub mod source;

pub use config::AppConfig;
pub use report::{CsvReportWriter, DEFAULT_REPORT_NAME, LogSummarySink, read_report};
pub use source::JsonLinesSource;
