// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ConfigurationError, ErrorContext, ExtCounterError, MalformedInputError, OutputError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{BaseName, FileExtension, NO_EXTENSION, RecordCount};
