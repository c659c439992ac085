//! # Ports
//!
//! Interface definitions for the pipeline's external collaborators.
//!
//! - [`source`]: where raw records come from
//! - [`report`]: where the finished aggregate goes (report artifact and summary log)
//!
//! The use case layer only talks to these traits, so adapters can be swapped
//! without touching the pipeline.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod report;
pub mod source;
