use std::path::PathBuf;

use ext_counter_domain::ExtensionCount;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountExtensionsOutput {
    /// Ordered ascending by extension.
    pub counts: Vec<ExtensionCount>,
    pub raw_records: usize,
    pub distinct_records: usize,
    pub report_path: PathBuf,
}

impl CountExtensionsOutput {
    pub fn duplicates_dropped(&self) -> usize {
        self.raw_records - self.distinct_records
    }
}
