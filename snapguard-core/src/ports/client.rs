// snapguard-core/src/ports/client.rs

// This file defines what the application needs from the cloud provider,
// without knowing how it's done. Transport, authentication and retry
// behavior all live behind this seam.

use crate::domain::{Snapshot, TagSet, Volume};
use crate::error::SnapguardError;
use async_trait::async_trait;

#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Enumerate every volume visible to the caller's credentials.
    /// A single call; continuation tokens are not followed.
    async fn list_volumes(&self) -> Result<Vec<Volume>, SnapguardError>;

    /// Create a snapshot of `volume_id`, carrying `tags` at creation time.
    async fn create_snapshot(
        &self,
        volume_id: &str,
        description: &str,
        tags: &TagSet,
    ) -> Result<Snapshot, SnapguardError>;

    /// Apply `tags` to an existing resource.
    async fn apply_tags(&self, resource_id: &str, tags: &TagSet) -> Result<(), SnapguardError>;

    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), SnapguardError>;

    /// Enumerate the caller's pre-existing snapshots of `volume_id`.
    async fn list_snapshots(&self, volume_id: &str) -> Result<Vec<Snapshot>, SnapguardError>;
}
