//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: runs source → parse → dedupe → aggregate → report
//! - [`context`]: explicit per-run settings handed to the pipeline
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod context;
pub mod dto;
mod executor;
pub mod orchestrator;

pub use context::PipelineContext;
pub use dto::CountExtensionsOutput;
pub use orchestrator::CountExtensions;
