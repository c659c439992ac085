pub mod entities;

pub use entities::{DedupKey, ExtensionCount, ParsedRecord, RawRecord};
