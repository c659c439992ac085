use std::collections::HashMap;

use ext_counter_shared_kernel::{FileExtension, RecordCount};

use crate::model::{ExtensionCount, ParsedRecord};

/// Partial per-extension counts.
///
/// Tallies built over disjoint slices of the same record set can be
/// combined with [`ExtensionTally::merge`] in any grouping or order and
/// produce the same result as tallying everything at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTally {
    counts: HashMap<FileExtension, RecordCount>,
}

impl ExtensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[ParsedRecord]) -> Self {
        let mut tally = Self::new();
        for record in records {
            tally.record(record);
        }
        tally
    }

    pub fn record(&mut self, record: &ParsedRecord) {
        self.counts.entry(record.extension.clone()).or_default().increment();
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (ext, count) in other.counts {
            *self.counts.entry(ext).or_default() += count;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rows ordered ascending by extension bytes.
    pub fn into_sorted_counts(self) -> Vec<ExtensionCount> {
        let mut rows: Vec<ExtensionCount> = self
            .counts
            .into_iter()
            .map(|(extension, count)| ExtensionCount { extension, count })
            .collect();
        rows.sort_unstable_by(|a, b| a.extension.cmp(&b.extension));
        rows
    }
}

/// Groups deduplicated records by extension.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(records: &[ParsedRecord]) -> Vec<ExtensionCount> {
        ExtensionTally::from_records(records).into_sorted_counts()
    }
}

/// Sum of all counts in an aggregate.
pub fn total_count(counts: &[ExtensionCount]) -> RecordCount {
    counts.iter().map(|c| c.count).sum()
}
