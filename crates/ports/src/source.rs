// crates/ports/src/source.rs
use ext_counter_domain::RawRecord;
use ext_counter_shared_kernel::Result;

/// Lazy stream of raw records; the first `Err` ends the run.
pub type RecordStream<'a> = Box<dyn Iterator<Item = Result<RawRecord>> + 'a>;

/// Port yielding raw file records.
pub trait RecordSource: Send + Sync {
    fn records(&self) -> Result<RecordStream<'_>>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String;
}
