pub mod extension_count;
pub mod parsed_record;
pub mod raw_record;

pub use extension_count::ExtensionCount;
pub use parsed_record::{DedupKey, ParsedRecord};
pub use raw_record::RawRecord;
