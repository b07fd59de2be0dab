//! Service layer wrapping the database handle.
//!
//! `StoreService` owns an [`UpliftDb`] and hosts every repository method as
//! `impl StoreService` blocks (one file per entity under `repos/`).

use crate::UpliftDb;
use crate::error::StoreError;

/// The Experiment Record Store: all reads and mutations go through here.
pub struct StoreService {
    db: UpliftDb,
}

impl StoreService {
    /// Open a service over a local database file (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, StoreError> {
        let db = UpliftDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Open a service backed by a synced Turso embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the replica cannot be opened or synced.
    pub async fn new_synced(
        replica_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, StoreError> {
        let db = UpliftDb::open_synced(replica_path, remote_url, auth_token).await?;
        Ok(Self { db })
    }

    /// Wrap an existing database handle (for testing).
    #[must_use]
    pub const fn from_db(db: UpliftDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &UpliftDb {
        &self.db
    }

    /// Sync the underlying database with remote cloud state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the sync round-trip fails.
    pub async fn sync(&self) -> Result<(), StoreError> {
        self.db.sync().await
    }

    /// Whether this service is backed by a synced Turso replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.db.is_synced_replica()
    }
}
