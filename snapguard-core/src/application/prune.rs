// snapguard-core/src/application/prune.rs
//
// Retention cleanup over pre-existing snapshots. The maintenance pass only
// ever evaluates the snapshot it just created, so snapshots from earlier
// runs outlive the window until this pass is invoked explicitly.

use chrono::Utc;

use crate::domain::retention::RetentionWindow;
use crate::error::SnapguardError;
use crate::infrastructure::config::MaintainerConfig;
use crate::ports::client::StorageClient;

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PruneReport {
    pub volumes_seen: usize,
    pub snapshots_examined: usize,
    pub snapshots_deleted: usize,
}

/// Delete every owned snapshot whose whole-day age meets or exceeds the
/// retention window, volume by volume. Sequential and fail-fast, like the
/// maintenance pass.
pub async fn prune_snapshots(
    config: &MaintainerConfig,
    client: &dyn StorageClient,
) -> Result<PruneReport, SnapguardError> {
    println!(
        "🧹 Pruning snapshots older than {} days...",
        config.retention_days
    );
    let start = std::time::Instant::now();

    let window = RetentionWindow::days(config.retention_days);
    let volumes = client.list_volumes().await?;

    let mut report = PruneReport {
        volumes_seen: volumes.len(),
        ..Default::default()
    };

    for volume in &volumes {
        let snapshots = client.list_snapshots(&volume.id).await?;
        report.snapshots_examined += snapshots.len();

        for snapshot in &snapshots {
            let age = RetentionWindow::age_in_days(snapshot.start_time, Utc::now());
            if window.is_expired(age) {
                client.delete_snapshot(&snapshot.id).await?;
                report.snapshots_deleted += 1;
                println!("   🗑️  {} ({}d old, volume {})", snapshot.id, age, volume.id);
            }
        }
    }

    println!(
        "✨ Done in {:.2?}. Examined {}, deleted {}.",
        start.elapsed(),
        report.snapshots_examined,
        report.snapshots_deleted
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::application::test_support::RecordingClient;
    use crate::domain::{Snapshot, Volume};
    use anyhow::Result;
    use chrono::Duration;

    fn config_with_retention(days: u32) -> MaintainerConfig {
        MaintainerConfig {
            retention_days: days,
            ..MaintainerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_only_expired_snapshots_deleted() -> Result<()> {
        let now = Utc::now();
        let client = RecordingClient::with_volumes(vec![Volume::new("vol-1")])
            .with_existing_snapshots(
                "vol-1",
                vec![
                    Snapshot::new("snap-old", now - Duration::days(10)),
                    Snapshot::new("snap-edge", now - Duration::days(7)),
                    Snapshot::new("snap-young", now - Duration::days(3)),
                ],
            );

        let report = prune_snapshots(&config_with_retention(7), &client).await?;
        assert_eq!(report.snapshots_examined, 3);
        assert_eq!(report.snapshots_deleted, 2);
        assert_eq!(client.deletions(), vec!["snap-old", "snap-edge"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_window_deletes_everything() -> Result<()> {
        let now = Utc::now();
        let client = RecordingClient::with_volumes(vec![Volume::new("vol-1")])
            .with_existing_snapshots("vol-1", vec![Snapshot::new("snap-fresh", now)]);

        let report = prune_snapshots(&config_with_retention(0), &client).await?;
        assert_eq!(report.snapshots_deleted, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_snapshots_no_deletions() -> Result<()> {
        let client = RecordingClient::with_volumes(vec![Volume::new("vol-1")]);
        let report = prune_snapshots(&config_with_retention(7), &client).await?;
        assert_eq!(report.snapshots_examined, 0);
        assert!(client.deletions().is_empty());
        Ok(())
    }
}
