use anyhow::Context;

use uplift_config::UpliftConfig;
use uplift_store::service::StoreService;

use crate::cli::GlobalFlags;

/// Everything a command handler needs: loaded config, an open store, and
/// the resolved project id (if any).
pub struct AppContext {
    pub config: UpliftConfig,
    pub store: StoreService,
    project_id: Option<String>,
}

impl AppContext {
    /// Load config and open the store.
    ///
    /// `--db` forces a plain local file. Otherwise a synced Turso embedded
    /// replica is used when `turso.url`, `turso.auth_token`, and
    /// `turso.local_replica_path` are all configured, falling back to the
    /// local `general.db_path` file.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = UpliftConfig::load_with_dotenv()?;

        let store = if let Some(db_path) = flags.db.as_deref() {
            StoreService::new_local(db_path)
                .await
                .with_context(|| format!("failed to open database '{db_path}'"))?
        } else if config.turso.is_configured() && config.turso.has_local_replica() {
            tracing::debug!(url = %config.turso.url, "opening synced Turso replica");
            StoreService::new_synced(
                &config.turso.local_replica_path,
                &config.turso.url,
                &config.turso.auth_token,
            )
            .await
            .context("failed to open Turso embedded replica")?
        } else {
            StoreService::new_local(&config.general.db_path)
                .await
                .with_context(|| {
                    format!("failed to open database '{}'", config.general.db_path)
                })?
        };

        let project_id = flags
            .project
            .clone()
            .or_else(|| (!config.general.default_project.is_empty())
                .then(|| config.general.default_project.clone()));

        Ok(Self {
            config,
            store,
            project_id,
        })
    }

    /// The active project id, from `--project` or config.
    ///
    /// # Errors
    ///
    /// Fails when neither is set.
    pub fn require_project(&self) -> anyhow::Result<&str> {
        self.project_id.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "no project selected — pass --project or set general.default_project in config"
            )
        })
    }
}
