use serde::{Deserialize, Serialize};

/// Collapses every value observed for one key into a single output value.
/// Values arrive in shard-index order, within-shard order preserved.
pub type ReduceFunction = fn(String, Vec<String>) -> String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
