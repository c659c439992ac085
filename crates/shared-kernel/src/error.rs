// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ExtCounterError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ExtCounterError>,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, ExtCounterError>;

/// Problems with the settings the pipeline is started with.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file '{path}': {details}")]
    Invalid { path: PathBuf, details: String },

    #[error("Missing required setting '{key}'")]
    MissingSetting { key: String },

    #[error("Input file not found: '{path}'")]
    InputNotFound { path: PathBuf },

    #[error("Invalid value for {setting}: {value} - {reason}")]
    InvalidValue {
        setting: String,
        value: String,
        reason: String,
    },
}

/// A source record that cannot be turned into a raw record.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    #[error("Failed to open input '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is not a valid JSON object: {details}")]
    Json { line: usize, details: String },

    #[error("Line {line} has no string field 'nm'")]
    MissingName { line: usize },

    #[error("Report row {row} is malformed: {details}")]
    ReportRow { row: usize, details: String },
}

impl MalformedInputError {
    /// 1-based line number of the offending record, when one is known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Open { .. } => None,
            Self::Read { line, .. }
            | Self::Json { line, .. }
            | Self::MissingName { line }
            | Self::ReportRow { row: line, .. } => Some(*line),
        }
    }
}

/// Failures while producing the report artifact.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write report '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory does not exist: '{path}'")]
    DirectoryMissing { path: PathBuf },

    #[error("Failed to encode report rows: {details}")]
    Encode { details: String },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ExtCounterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ExtCounterError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ExtCounterError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

impl ExtCounterError {
    /// Strips any [`ExtCounterError::Context`] layers.
    pub fn root(&self) -> &ExtCounterError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
