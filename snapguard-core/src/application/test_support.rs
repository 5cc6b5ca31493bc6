// snapguard-core/src/application/test_support.rs
//
// In-memory StorageClient double for the use-case tests. Records every
// request so tests can assert on exact call sequences.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Snapshot, TagSet, Volume};
use crate::error::SnapguardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::client::StorageClient;

#[derive(Debug, Clone)]
pub struct CreationRequest {
    pub snapshot_id: String,
    pub volume_id: String,
    pub description: String,
    pub tags: TagSet,
}

#[derive(Debug, Clone)]
pub struct TagRequest {
    pub resource_id: String,
    pub tags: TagSet,
}

#[derive(Default)]
pub struct RecordingClient {
    volumes: Vec<Volume>,
    existing: HashMap<String, Vec<Snapshot>>,
    fail_create_on: Option<String>,
    creations: Mutex<Vec<CreationRequest>>,
    tag_applications: Mutex<Vec<TagRequest>>,
    deletions: Mutex<Vec<String>>,
}

impl RecordingClient {
    pub fn with_volumes(volumes: Vec<Volume>) -> Self {
        Self {
            volumes,
            ..Self::default()
        }
    }

    pub fn with_existing_snapshots(mut self, volume_id: &str, snapshots: Vec<Snapshot>) -> Self {
        self.existing.insert(volume_id.to_string(), snapshots);
        self
    }

    /// Make `create_snapshot` fail for the given volume id.
    pub fn failing_create_on(mut self, volume_id: &str) -> Self {
        self.fail_create_on = Some(volume_id.to_string());
        self
    }

    pub fn creations(&self) -> Vec<CreationRequest> {
        self.creations.lock().unwrap().clone()
    }

    pub fn tag_applications(&self) -> Vec<TagRequest> {
        self.tag_applications.lock().unwrap().clone()
    }

    pub fn deletions(&self) -> Vec<String> {
        self.deletions.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageClient for RecordingClient {
    async fn list_volumes(&self) -> Result<Vec<Volume>, SnapguardError> {
        Ok(self.volumes.clone())
    }

    async fn create_snapshot(
        &self,
        volume_id: &str,
        description: &str,
        tags: &TagSet,
    ) -> Result<Snapshot, SnapguardError> {
        if self.fail_create_on.as_deref() == Some(volume_id) {
            return Err(InfrastructureError::api("CreateSnapshot", "injected failure").into());
        }

        let mut creations = self.creations.lock().unwrap();
        let snapshot = Snapshot::new(format!("snap-{:04}", creations.len() + 1), Utc::now());
        creations.push(CreationRequest {
            snapshot_id: snapshot.id.clone(),
            volume_id: volume_id.to_string(),
            description: description.to_string(),
            tags: tags.clone(),
        });
        Ok(snapshot)
    }

    async fn apply_tags(&self, resource_id: &str, tags: &TagSet) -> Result<(), SnapguardError> {
        self.tag_applications.lock().unwrap().push(TagRequest {
            resource_id: resource_id.to_string(),
            tags: tags.clone(),
        });
        Ok(())
    }

    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), SnapguardError> {
        self.deletions.lock().unwrap().push(snapshot_id.to_string());
        Ok(())
    }

    async fn list_snapshots(&self, volume_id: &str) -> Result<Vec<Snapshot>, SnapguardError> {
        Ok(self.existing.get(volume_id).cloned().unwrap_or_default())
    }
}
