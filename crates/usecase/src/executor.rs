// Stage execution backends. Output is identical regardless of backend.

#[cfg(feature = "parallel")]
use ext_counter_domain::ExtensionTally;
use ext_counter_domain::{Aggregator, ExtensionCount, ParsedRecord, RawRecord, parse_all};
#[cfg(feature = "parallel")]
use ext_counter_shared_kernel::ConfigurationError;
use ext_counter_shared_kernel::Result;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::context::PipelineContext;

/// Below this many records the sequential path is used even when jobs > 1.
#[cfg(feature = "parallel")]
pub(crate) const PARALLEL_THRESHOLD: usize = 1024;

#[cfg(feature = "parallel")]
const AGGREGATE_CHUNK: usize = 4096;

pub(crate) struct Executor {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Executor {
    #[cfg(feature = "parallel")]
    pub(crate) fn new(ctx: &PipelineContext) -> Result<Self> {
        if !ctx.is_parallel() {
            return Ok(Self { pool: None });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(ctx.jobs)
            .thread_name(|i| format!("ext-counter-{i}"))
            .build()
            .map_err(|err| ConfigurationError::InvalidValue {
                setting: "jobs".to_string(),
                value: ctx.jobs.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self { pool: Some(pool) })
    }

    #[cfg(not(feature = "parallel"))]
    pub(crate) fn new(ctx: &PipelineContext) -> Result<Self> {
        let _ = ctx;
        Ok(Self {})
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn parse(&self, records: &[RawRecord]) -> Vec<ParsedRecord> {
        match &self.pool {
            Some(pool) if records.len() >= PARALLEL_THRESHOLD => {
                // Indexed collect keeps input order, so first-seen dedup stays deterministic.
                pool.install(|| records.par_iter().map(RawRecord::parse).collect())
            }
            _ => parse_all(records),
        }
    }

    #[cfg(not(feature = "parallel"))]
    pub(crate) fn parse(&self, records: &[RawRecord]) -> Vec<ParsedRecord> {
        parse_all(records)
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn aggregate(&self, records: &[ParsedRecord]) -> Vec<ExtensionCount> {
        match &self.pool {
            Some(pool) if records.len() >= PARALLEL_THRESHOLD => pool.install(|| {
                records
                    .par_chunks(AGGREGATE_CHUNK)
                    .map(ExtensionTally::from_records)
                    .reduce(ExtensionTally::new, ExtensionTally::merge)
                    .into_sorted_counts()
            }),
            _ => Aggregator::aggregate(records),
        }
    }

    #[cfg(not(feature = "parallel"))]
    pub(crate) fn aggregate(&self, records: &[ParsedRecord]) -> Vec<ExtensionCount> {
        Aggregator::aggregate(records)
    }
}
