//! # uplift-store
//!
//! libSQL-backed Experiment Record Store for Uplift.
//!
//! Holds all relational state: projects, members, experiments, variants,
//! and the notes feed. Runs against a local database file (or `:memory:`
//! for tests) or a Turso Cloud embedded replica synced to the hosted
//! deployment.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
pub mod updates;

mod test_support;

use error::StoreError;
use libsql::Builder;

/// Central database handle for all Uplift state operations.
///
/// Wraps a libSQL database and connection, and provides prefixed ID
/// generation. Repository methods live on [`service::StoreService`].
pub struct UpliftDb {
    db: libsql::Database,
    conn: libsql::Connection,
    synced: bool,
}

impl UpliftDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let store = Self {
            db,
            conn,
            synced: false,
        };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Open a Turso embedded replica synced against the hosted database.
    ///
    /// The replica lives at `replica_path`; reads are local, writes sync to
    /// `remote_url` authenticated with `auth_token`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the replica cannot be opened, the initial
    /// sync fails, or migrations fail.
    pub async fn open_synced(
        replica_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, StoreError> {
        let db = Builder::new_remote_replica(
            replica_path.to_string(),
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .build()
        .await?;
        db.sync().await?;
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let store = Self {
            db,
            conn,
            synced: true,
        };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle is backed by a synced Turso replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.synced
    }

    /// Push local writes to (and pull remote writes from) the hosted database.
    ///
    /// No-op for local-only databases. Transient Turso infrastructure errors
    /// are retried with capped exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the sync round-trip fails after retries.
    pub async fn sync(&self) -> Result<(), StoreError> {
        if !self.synced {
            return Ok(());
        }

        let config = retry::RetryConfig::default();
        let mut attempt = 0u32;
        loop {
            match self.db.sync().await {
                Ok(_) => return Ok(()),
                Err(e)
                    if attempt + 1 < config.max_attempts
                        && retry::is_transient_turso_error(&e) =>
                {
                    let delay = config.delay_for(attempt);
                    tracing::warn!(%e, ?delay, "transient Turso sync error, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"exp-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
