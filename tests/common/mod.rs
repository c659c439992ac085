// tests/common/mod.rs
//! Shared test utilities.

pub mod workspace;

#[allow(unused_imports)]
pub use workspace::JobWorkspace;
