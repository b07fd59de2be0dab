//! Turso/libSQL configuration: where the hosted experiment database lives.

use serde::{Deserialize, Serialize};

/// Default sync interval in seconds.
const fn default_sync_interval_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TursoConfig {
    /// Database URL (e.g., `libsql://uplift-myorg.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database auth token.
    #[serde(default)]
    pub auth_token: String,

    /// Sync interval for embedded replicas, in seconds.
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,

    /// Local replica path for embedded replica mode.
    #[serde(default)]
    pub local_replica_path: String,
}

impl Default for TursoConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            sync_interval_secs: default_sync_interval_secs(),
            local_replica_path: String::new(),
        }
    }
}

impl TursoConfig {
    /// Check if the Turso config has the minimum required fields for remote access.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check if embedded replica mode is enabled.
    #[must_use]
    pub fn has_local_replica(&self) -> bool {
        !self.local_replica_path.is_empty()
    }
}
