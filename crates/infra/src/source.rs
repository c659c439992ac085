// crates/infra/src/source.rs
use std::{io::BufRead, path::PathBuf};

use ext_counter_domain::RawRecord;
use ext_counter_ports::source::{RecordSource, RecordStream};
use ext_counter_shared_kernel::{MalformedInputError, Result};
use serde_json::Value;

use crate::persistence::FileReader;

/// Field carrying the file name in each input object.
pub const NAME_FIELD: &str = "nm";

/// Newline-delimited JSON file, one object per line.
#[derive(Debug, Clone)]
pub struct JsonLinesSource {
    path: PathBuf,
}

impl JsonLinesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonLinesSource {
    fn records(&self) -> Result<RecordStream<'_>> {
        let reader = FileReader::open_buffered(&self.path)
            .map_err(|source| MalformedInputError::Open { path: self.path.clone(), source })?;

        let records = reader
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| decode_line(idx + 1, line).transpose());
        Ok(Box::new(records))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn decode_line(line_no: usize, line: std::io::Result<String>) -> Result<Option<RawRecord>> {
    let line = line.map_err(|source| MalformedInputError::Read { line: line_no, source })?;
    let text = if line_no == 1 { line.trim_start_matches('\u{feff}') } else { line.as_str() };
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_record(text, line_no)?))
}

/// Decode one JSON object into a [`RawRecord`], keeping unknown fields.
pub fn parse_record(text: &str, line: usize) -> std::result::Result<RawRecord, MalformedInputError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| MalformedInputError::Json { line, details: err.to_string() })?;

    let Value::Object(mut fields) = value else {
        return Err(MalformedInputError::Json { line, details: "expected a JSON object".to_string() });
    };

    match fields.remove(NAME_FIELD) {
        Some(Value::String(name)) => Ok(RawRecord::with_extra(name, fields)),
        _ => Err(MalformedInputError::MissingName { line }),
    }
}
