use ext_counter_shared_kernel::{BaseName, FileExtension};
use serde::{Deserialize, Serialize};

/// A raw name split into base name and extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub base_name: BaseName,
    pub extension: FileExtension,
}

impl ParsedRecord {
    pub fn new(base_name: BaseName, extension: FileExtension) -> Self {
        Self { base_name, extension }
    }

    /// Identity used for deduplication.
    pub fn key(&self) -> DedupKey {
        DedupKey { extension: self.extension.clone(), base_name: self.base_name.clone() }
    }
}

/// `(extension, base name)` pair; records sharing it are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DedupKey {
    pub extension: FileExtension,
    pub base_name: BaseName,
}
