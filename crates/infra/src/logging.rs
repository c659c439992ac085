// crates/infra/src/logging.rs
use std::str::FromStr;

use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parses `off`, `error`, `warn`, `info`, `debug` or `trace`, case-insensitively.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Installs the process-wide logger with UTC timestamps. Call once, before the pipeline runs.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    SimpleLogger::new().with_level(level).with_utc_timestamps().init()
}
