use std::fmt;

use ext_counter_shared_kernel::{FileExtension, RecordCount};
use serde::{Deserialize, Serialize};

/// Final aggregate row: how many distinct files carry `extension`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionCount {
    pub extension: FileExtension,
    pub count: RecordCount,
}

impl ExtensionCount {
    pub fn new(extension: impl Into<FileExtension>, count: impl Into<RecordCount>) -> Self {
        Self { extension: extension.into(), count: count.into() }
    }
}

/// Renders the summary form `<extension>: <count>`.
impl fmt::Display for ExtensionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.extension, self.count)
    }
}
