use std::collections::HashSet;

use crate::model::{DedupKey, ParsedRecord};

/// Collapses records sharing a [`DedupKey`], keeping the first occurrence.
pub struct Deduplicator;

impl Deduplicator {
    pub fn dedupe(records: Vec<ParsedRecord>) -> Vec<ParsedRecord> {
        let mut seen: HashSet<DedupKey> = HashSet::with_capacity(records.len());
        records.into_iter().filter(|record| seen.insert(record.key())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_name;

    fn parsed(names: &[&str]) -> Vec<ParsedRecord> {
        names.iter().map(|n| parse_name(n)).collect()
    }

    #[test]
    fn removes_duplicate_keys() {
        let records = parsed(&["a.txt", "b.txt", "a.txt", "noext"]);
        let deduped = Deduplicator::dedupe(records);
        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn keeps_first_seen_order() {
        let records = parsed(&["b.md", "a.txt", "b.md", "c.rs"]);
        let names: Vec<_> = Deduplicator::dedupe(records)
            .into_iter()
            .map(|r| r.base_name.into_string())
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn same_base_name_with_different_extensions_survive() {
        let deduped = Deduplicator::dedupe(parsed(&["a.txt", "a.md"]));
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn different_raw_names_can_collide_after_parsing() {
        // Both parse to (c, tar).
        let deduped = Deduplicator::dedupe(parsed(&["c.tar.gz", "c.tar.bz2"]));
        assert_eq!(deduped.len(), 1);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let once = Deduplicator::dedupe(parsed(&["x.a", "x.a", "y.b", "y.b", "z"]));
        let twice = Deduplicator::dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(Deduplicator::dedupe(Vec::new()).is_empty());
    }
}
