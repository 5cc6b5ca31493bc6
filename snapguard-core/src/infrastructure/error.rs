// snapguard-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- UPSTREAM API ---
    #[error("EC2 {operation} failed: {message}")]
    #[diagnostic(
        code(snapguard::infra::api),
        help("Check credentials, region and IAM permissions for this operation.")
    )]
    Api { operation: &'static str, message: String },

    // --- CONFIGURATION ---
    #[error("Configuration Error: {0}")]
    #[diagnostic(
        code(snapguard::infra::config),
        help("Check the RETENTION_DAYS / *_TAG environment variables.")
    )]
    Config(String),
}

impl InfrastructureError {
    /// Shortcut for wrapping an SDK error behind a named operation.
    pub fn api(operation: &'static str, err: impl std::fmt::Display) -> Self {
        InfrastructureError::Api {
            operation,
            message: err.to_string(),
        }
    }
}
