// snapguard-core/src/domain/resources.rs
//
// Provider-independent views of the two cloud resources this tool touches.
// Only the fields the maintenance loop actually consumes are modeled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A block-storage volume. Existence is the only attribute consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub id: String,
}

impl Volume {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A point-in-time copy of a volume. Both fields are provider-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub start_time: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(id: impl Into<String>, start_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            start_time,
        }
    }
}
