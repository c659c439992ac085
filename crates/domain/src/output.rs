// crates/domain/src/output.rs
//! Line formats for the summary log and the CSV report.

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use ext_counter_shared_kernel::{MalformedInputError, OutputError};

use crate::model::ExtensionCount;

/// `<extension>: <count>`
pub fn summary_line(count: &ExtensionCount) -> String {
    count.to_string()
}

/// Renders every row as `<extension>,<count>` terminated by `\n`.
///
/// Fields are quoted only when they hold a separator, quote or line break.
/// Empty input yields an empty buffer.
pub fn render_csv(counts: &[ExtensionCount]) -> Result<Vec<u8>, OutputError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(counts.len() * 16));

    for count in counts {
        writer
            .serialize((count.extension.as_str(), count.count.value()))
            .map_err(|err| encode_error(&err))?;
    }

    writer.into_inner().map_err(|err| encode_error(err.error()))
}

/// Parses a headerless `<extension>,<count>` report back into rows.
pub fn parse_csv(content: &str) -> Result<Vec<ExtensionCount>, MalformedInputError> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(content.as_bytes());

    reader
        .deserialize::<(String, u64)>()
        .enumerate()
        .map(|(index, row)| {
            row.map(|(extension, count)| ExtensionCount::new(extension, count))
                .map_err(|err| MalformedInputError::ReportRow { row: index + 1, details: err.to_string() })
        })
        .collect()
}

fn encode_error(err: &impl std::fmt::Display) -> OutputError {
    OutputError::Encode { details: err.to_string() }
}
