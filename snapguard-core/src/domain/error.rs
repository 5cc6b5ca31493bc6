// snapguard-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Provider returned a snapshot without an identifier (volume '{0}')")]
    #[diagnostic(
        code(snapguard::domain::snapshot_id_missing),
        help("The CreateSnapshot response is expected to carry a snapshot id.")
    )]
    SnapshotIdMissing(String),

    #[error("Provider returned snapshot '{0}' without a start time")]
    #[diagnostic(
        code(snapguard::domain::start_time_missing),
        help("Retention evaluation needs the provider-assigned start timestamp.")
    )]
    StartTimeMissing(String),

    #[error("Volume entry without an identifier in the enumeration response")]
    #[diagnostic(code(snapguard::domain::volume_id_missing))]
    VolumeIdMissing,
}
