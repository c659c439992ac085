use ext_counter_domain::{Deduplicator, RawRecord};
use ext_counter_ports::{
    report::{ReportSink, SummarySink},
    source::RecordSource,
};
use ext_counter_shared_kernel::{ErrorContext, Result};
use log::debug;

use crate::{context::PipelineContext, dto::CountExtensionsOutput, executor::Executor};

/// Counts distinct files per extension and publishes the ordered result.
pub struct CountExtensions<'a> {
    source: &'a dyn RecordSource,
    report: &'a dyn ReportSink,
    summary: &'a dyn SummarySink,
}

impl<'a> CountExtensions<'a> {
    pub fn new(source: &'a dyn RecordSource, report: &'a dyn ReportSink, summary: &'a dyn SummarySink) -> Self {
        Self { source, report, summary }
    }

    /// Runs every stage once. Either the full report is written or an error is returned.
    ///
    /// The summary is emitted only after the report has been written.
    ///
    /// # Errors
    ///
    /// Propagates malformed-input errors from the source, thread pool setup
    /// failures and report write failures.
    pub fn run(&self, ctx: &PipelineContext) -> Result<CountExtensionsOutput> {
        let executor = Executor::new(ctx)?;

        let raw = self.read_all()?;
        debug!("read {} records from {}", raw.len(), self.source.describe());

        let parsed = executor.parse(&raw);
        let raw_records = raw.len();
        drop(raw);

        let distinct = Deduplicator::dedupe(parsed);
        debug!("{} distinct records after dedup", distinct.len());

        let counts = executor.aggregate(&distinct);
        debug!("{} extensions", counts.len());

        let report_path = self.report.write(&counts).context("writing report")?;
        self.summary.emit(&counts);

        Ok(CountExtensionsOutput { counts, raw_records, distinct_records: distinct.len(), report_path })
    }

    fn read_all(&self) -> Result<Vec<RawRecord>> {
        self.source
            .records()?
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("reading records from {}", self.source.describe()))
    }
}
