#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;

pub use app::run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
