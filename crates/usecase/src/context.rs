/// Settings for a single pipeline run. Nothing here outlives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineContext {
    /// Worker threads for the parse and aggregate stages; `1` keeps everything on the caller's thread.
    pub jobs: usize,
}

impl PipelineContext {
    pub fn new(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }

    pub fn sequential() -> Self {
        Self::new(1)
    }

    pub fn is_parallel(&self) -> bool {
        self.jobs > 1
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::sequential()
    }
}
