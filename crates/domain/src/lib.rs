// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod output;
pub mod parser;

pub use analytics::{Aggregator, Deduplicator, ExtensionTally};
pub use model::{DedupKey, ExtensionCount, ParsedRecord, RawRecord};
pub use parser::{parse_all, parse_name};
