// snapguard-core/src/infrastructure/adapters/ec2.rs

use async_trait::async_trait;
use aws_sdk_ec2::Client;
use aws_sdk_ec2::types::{Filter, ResourceType, Tag, TagSpecification};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

// Hexagonal imports
use crate::domain::{DomainError, Snapshot, TagSet, Volume};
use crate::error::SnapguardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::client::StorageClient;

/// EC2-backed implementation of the [`StorageClient`] port.
///
/// Credentials, region and retry behavior come from the shared AWS
/// configuration the caller loaded (environment, profile, instance role).
pub struct Ec2StorageClient {
    client: Client,
}

impl Ec2StorageClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS configuration chain.
    pub async fn from_env() -> Self {
        let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        info!(region = ?shared.region(), "EC2 client initialized");
        Self::new(Client::new(&shared))
    }

    fn sdk_tags(tags: &TagSet) -> Vec<Tag> {
        tags.iter()
            .map(|(key, value)| Tag::builder().key(key).value(value).build())
            .collect()
    }

    fn to_chrono(
        snapshot_id: &str,
        start: Option<&aws_sdk_ec2::primitives::DateTime>,
    ) -> Result<DateTime<Utc>, SnapguardError> {
        let start = start
            .ok_or_else(|| DomainError::StartTimeMissing(snapshot_id.to_string()))?;
        DateTime::<Utc>::from_timestamp(start.secs(), start.subsec_nanos())
            .ok_or_else(|| DomainError::StartTimeMissing(snapshot_id.to_string()).into())
    }
}

#[async_trait]
impl StorageClient for Ec2StorageClient {
    async fn list_volumes(&self) -> Result<Vec<Volume>, SnapguardError> {
        // Single call; a truncated response is not followed up.
        let output = self
            .client
            .describe_volumes()
            .send()
            .await
            .map_err(|e| InfrastructureError::api("DescribeVolumes", e))?;

        let mut volumes = Vec::new();
        for volume in output.volumes() {
            let id = volume
                .volume_id()
                .ok_or(DomainError::VolumeIdMissing)?;
            volumes.push(Volume::new(id));
        }
        debug!(count = volumes.len(), "Volumes enumerated");
        Ok(volumes)
    }

    async fn create_snapshot(
        &self,
        volume_id: &str,
        description: &str,
        tags: &TagSet,
    ) -> Result<Snapshot, SnapguardError> {
        let spec = TagSpecification::builder()
            .resource_type(ResourceType::Snapshot)
            .set_tags(Some(Self::sdk_tags(tags)))
            .build();

        let output = self
            .client
            .create_snapshot()
            .volume_id(volume_id)
            .description(description)
            .tag_specifications(spec)
            .send()
            .await
            .map_err(|e| InfrastructureError::api("CreateSnapshot", e))?;

        let snapshot_id = output
            .snapshot_id()
            .ok_or_else(|| DomainError::SnapshotIdMissing(volume_id.to_string()))?
            .to_string();
        let start_time = Self::to_chrono(&snapshot_id, output.start_time())?;

        Ok(Snapshot::new(snapshot_id, start_time))
    }

    async fn apply_tags(&self, resource_id: &str, tags: &TagSet) -> Result<(), SnapguardError> {
        self.client
            .create_tags()
            .resources(resource_id)
            .set_tags(Some(Self::sdk_tags(tags)))
            .send()
            .await
            .map_err(|e| InfrastructureError::api("CreateTags", e))?;
        Ok(())
    }

    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), SnapguardError> {
        self.client
            .delete_snapshot()
            .snapshot_id(snapshot_id)
            .send()
            .await
            .map_err(|e| InfrastructureError::api("DeleteSnapshot", e))?;
        Ok(())
    }

    async fn list_snapshots(&self, volume_id: &str) -> Result<Vec<Snapshot>, SnapguardError> {
        let filter = Filter::builder().name("volume-id").values(volume_id).build();

        let output = self
            .client
            .describe_snapshots()
            .owner_ids("self")
            .filters(filter)
            .send()
            .await
            .map_err(|e| InfrastructureError::api("DescribeSnapshots", e))?;

        let mut snapshots = Vec::new();
        for snap in output.snapshots() {
            let id = snap
                .snapshot_id()
                .ok_or_else(|| DomainError::SnapshotIdMissing(volume_id.to_string()))?
                .to_string();
            let start_time = Self::to_chrono(&id, snap.start_time())?;
            snapshots.push(Snapshot::new(id, start_time));
        }
        Ok(snapshots)
    }
}
