// snapguard-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapguardError {
    // --- DOMAIN ERRORS (incomplete provider responses) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (API calls, configuration) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_surface_the_operation_name() {
        let err: SnapguardError = InfrastructureError::api("CreateSnapshot", "throttled").into();
        assert_eq!(err.to_string(), "EC2 CreateSnapshot failed: throttled");
    }

    #[test]
    fn test_config_errors_are_distinct_from_api_failures() {
        let err: SnapguardError =
            InfrastructureError::Config("RETENTION_DAYS must be a non-negative integer".into())
                .into();
        assert!(err.to_string().starts_with("Configuration Error:"));
        assert!(matches!(
            err,
            SnapguardError::Infrastructure(InfrastructureError::Config(_))
        ));
    }
}
