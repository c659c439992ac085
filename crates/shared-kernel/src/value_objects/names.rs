// crates/shared-kernel/src/value_objects/names.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Extension recorded when a name carries no usable suffix.
pub const NO_EXTENSION: &str = "noextension";

/// File name with its extension removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct BaseName(String);

impl BaseName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for BaseName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for BaseName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for BaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-preserving file extension. Never empty: absent suffixes become [`NO_EXTENSION`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    /// Wraps `ext`, substituting the sentinel when it is empty.
    pub fn new(ext: impl Into<String>) -> Self {
        let ext = ext.into();
        if ext.is_empty() { Self::none() } else { Self(ext) }
    }

    pub fn none() -> Self {
        Self(NO_EXTENSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for FileExtension {
    fn default() -> Self {
        Self::none()
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl Deref for FileExtension {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for FileExtension {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
