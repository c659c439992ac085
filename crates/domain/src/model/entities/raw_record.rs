use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One ingested row. Only `nm` is interpreted; every other field rides along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "nm")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), extra: Map::new() }
    }

    pub fn with_extra(name: impl Into<String>, extra: Map<String, Value>) -> Self {
        Self { name: name.into(), extra }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
