//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default database path when no Turso replica is configured.
fn default_db_path() -> String {
    String::from("uplift.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Local database file used when Turso is not configured.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Default project id for board commands, so `upl board show` works
    /// without `--project`.
    #[serde(default)]
    pub default_project: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            default_project: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.db_path, "uplift.db");
        assert!(config.default_project.is_empty());
    }
}
