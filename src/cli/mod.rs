mod args;

pub use args::{Args, validate_jobs};
