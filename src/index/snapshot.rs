//! Serializable view of an index, for debugging output.

use serde::Serialize;

use super::PrefixSumIndex;

/// Logical contents of a [`PrefixSumIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSnapshot {
    /// Number of positions N.
    pub size: usize,
    /// Values at positions `1..=N`.
    pub values: Vec<i64>,
}

impl PrefixSumIndex {
    /// Capture the current logical values.
    pub fn snapshot(&self) -> IndexSnapshot {
        IndexSnapshot {
            size: self.size(),
            values: self.values(),
        }
    }
}

impl IndexSnapshot {
    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
