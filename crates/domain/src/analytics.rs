pub mod aggregate;
pub mod dedup;

pub use aggregate::{Aggregator, ExtensionTally, total_count};
pub use dedup::Deduplicator;
