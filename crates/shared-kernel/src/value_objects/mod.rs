// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod names;

pub use counts::RecordCount;
pub use names::{BaseName, FileExtension, NO_EXTENSION};
