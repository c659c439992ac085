// crates/domain/src/parser.rs
//! Name parsing: turns a raw file name into a `(base name, extension)` pair.
//!
//! Only the segment right after the first dot is treated as the extension,
//! so `archive.tar.gz` parses as `(archive, tar)`. Existing reports depend on
//! this, so it is kept as is.

use ext_counter_shared_kernel::{BaseName, FileExtension};

use crate::model::{ParsedRecord, RawRecord};

/// First segment text that stands for "no segment" and is replaced by the raw name.
const NULL_SEGMENT: &str = "null";

/// Parse `raw` into a [`ParsedRecord`]. Total: every input yields a record.
pub fn parse_name(raw: &str) -> ParsedRecord {
    let mut segments = raw.split('.');
    let first = segments.next().unwrap_or_default();

    let Some(second) = segments.next() else {
        return ParsedRecord::new(BaseName::new(raw), FileExtension::none());
    };

    let base = if first == NULL_SEGMENT { raw } else { first };
    ParsedRecord::new(BaseName::new(base), FileExtension::new(second))
}

/// Parse every record, preserving input order.
pub fn parse_all<'a, I>(records: I) -> Vec<ParsedRecord>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    records.into_iter().map(RawRecord::parse).collect()
}

impl RawRecord {
    pub fn parse(&self) -> ParsedRecord {
        parse_name(&self.name)
    }
}
