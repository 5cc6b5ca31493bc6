// snapguard-core/src/infrastructure/config.rs

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const ENV_RETENTION_DAYS: &str = "RETENTION_DAYS";
pub const ENV_ENVIRONMENT_TAG: &str = "ENVIRONMENT_TAG";
pub const ENV_APPLICATION_TAG: &str = "APPLICATION_TAG";
pub const ENV_OWNER_TAG: &str = "OWNER_TAG";

/// Resolved invocation configuration.
///
/// Built once at startup; the maintenance loop never re-reads ambient state
/// mid-operation. All defaults live in the `Default` impl below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainerConfig {
    pub retention_days: u32,
    pub environment_tag: String,
    pub application_tag: String,
    pub owner_tag: String,
}

impl Default for MaintainerConfig {
    fn default() -> Self {
        Self {
            retention_days: 7,
            environment_tag: "prod".to_string(),
            application_tag: "myapp".to_string(),
            owner_tag: "Anson".to_string(),
        }
    }
}

impl MaintainerConfig {
    /// Load the configuration from process environment variables.
    ///
    /// A malformed `RETENTION_DAYS` fails fast here, before any provider
    /// call is issued.
    #[instrument]
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), with the variable source
    /// injected. Tests pass a map instead of mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfrastructureError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_RETENTION_DAYS) {
            config.retention_days = raw.trim().parse::<u32>().map_err(|_| {
                InfrastructureError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_RETENTION_DAYS, raw
                ))
            })?;
        }
        if let Some(val) = lookup(ENV_ENVIRONMENT_TAG) {
            config.environment_tag = val;
        }
        if let Some(val) = lookup(ENV_APPLICATION_TAG) {
            config.application_tag = val;
        }
        if let Some(val) = lookup(ENV_OWNER_TAG) {
            config.owner_tag = val;
        }

        info!(
            retention_days = config.retention_days,
            environment = %config.environment_tag,
            application = %config.application_tag,
            "Configuration resolved"
        );
        Ok(config)
    }
}
