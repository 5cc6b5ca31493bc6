// snapguard-core/src/domain/tags.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed tag keys carried by every snapshot this tool creates.
pub const TAG_ENVIRONMENT: &str = "Environment";
pub const TAG_APPLICATION: &str = "Application";
pub const TAG_OWNER: &str = "Owner";
pub const TAG_VOLUME_ID: &str = "VolumeId";
pub const TAG_NAME: &str = "Name";

/// A key/value tag mapping with unique keys and deterministic iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Human-readable description embedded in the snapshot, seconds precision.
pub fn snapshot_description(volume_id: &str, now: DateTime<Utc>) -> String {
    format!(
        "Snapshot of volume {} taken at {} UTC",
        volume_id,
        now.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Value of the `Name` tag: volume id plus a compact UTC timestamp.
///
/// Callers pass their own `now` capture; it is deliberately independent from
/// the one used for the description, so the two renderings may differ by a
/// small amount.
pub fn snapshot_name(volume_id: &str, now: DateTime<Utc>) -> String {
    format!("{}-snapshot-{}", volume_id, now.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tag_set_unique_keys() {
        let mut tags = TagSet::new();
        tags.insert(TAG_OWNER, "alice");
        tags.insert(TAG_OWNER, "bob");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get(TAG_OWNER), Some("bob"));
    }

    #[test]
    fn test_snapshot_description_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 33).unwrap();
        assert_eq!(
            snapshot_description("vol-0abc", now),
            "Snapshot of volume vol-0abc taken at 2024-03-09 14:05:33 UTC"
        );
    }

    #[test]
    fn test_snapshot_name_contains_volume_id() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 33).unwrap();
        let name = snapshot_name("vol-0abc", now);
        assert_eq!(name, "vol-0abc-snapshot-20240309140533");
        assert!(name.contains("vol-0abc"));
    }
}
