// crates/ports/src/report.rs
use std::path::PathBuf;

use ext_counter_domain::ExtensionCount;
use ext_counter_shared_kernel::Result;

/// Port persisting the ordered aggregate as a single artifact.
pub trait ReportSink: Send + Sync {
    /// Writes (or overwrites) the report and returns where it landed.
    fn write(&self, counts: &[ExtensionCount]) -> Result<PathBuf>;
}

/// Port receiving one summary line per extension, in order.
pub trait SummarySink: Send + Sync {
    fn emit(&self, counts: &[ExtensionCount]);
}
