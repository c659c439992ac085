// crates/infra/src/config.rs
use std::path::{Path, PathBuf};

use ext_counter_shared_kernel::ConfigurationError;
use serde::Deserialize;

use crate::persistence::FileReader;

pub const DEFAULT_CONFIG_FILE: &str = "app-config.json";

const LOCATION_KEY: &str = "file-location";
const NAME_KEY: &str = "file-name";

#[derive(Debug, Deserialize)]
struct RawAppConfig {
    #[serde(rename = "file-location")]
    file_location: Option<String>,
    #[serde(rename = "file-name")]
    file_name: Option<String>,
}

/// Where the input lives. The report is written next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input_dir: PathBuf,
    pub input_file: String,
}

impl AppConfig {
    pub fn new(input_dir: impl Into<PathBuf>, input_file: impl Into<String>) -> Self {
        Self { input_dir: input_dir.into(), input_file: input_file.into() }
    }

    /// Load settings from a JSON file. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the file cannot be read, is not valid JSON, or a
    /// required setting is missing or empty.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let text = FileReader::read_to_string(path)
            .map_err(|source| ConfigurationError::Unreadable { path: path.to_path_buf(), source })?;
        Self::from_json(&text, path)
    }

    pub fn from_json(text: &str, origin: &Path) -> Result<Self, ConfigurationError> {
        let raw: RawAppConfig = serde_json::from_str(text)
            .map_err(|err| ConfigurationError::Invalid { path: origin.to_path_buf(), details: err.to_string() })?;

        let input_dir = required(raw.file_location, LOCATION_KEY)?;
        let input_file = required(raw.file_name, NAME_KEY)?;
        Ok(Self::new(input_dir, input_file))
    }

    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_file)
    }

    pub fn output_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Fails unless the input file exists, so the pipeline never starts without data.
    pub fn ensure_input_exists(&self) -> Result<(), ConfigurationError> {
        let path = self.input_path();
        if path.is_file() { Ok(()) } else { Err(ConfigurationError::InputNotFound { path }) }
    }
}

fn required(value: Option<String>, key: &str) -> Result<String, ConfigurationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigurationError::MissingSetting { key: key.to_string() }),
    }
}
