//! The record-store seam the board consumes.
//!
//! The controller issues a handful of RPC-style calls; abstracting them as a
//! trait lets the workflow run against the libSQL store in production and a
//! call-recording mock in tests.

use uplift_core::entities::{Experiment, Variant};
use uplift_store::error::StoreError;
use uplift_store::service::StoreService;
use uplift_store::updates::experiment::ExperimentUpdate;
use uplift_store::updates::variant::VariantUpdate;

/// The store calls the stage-transition workflow needs.
///
/// All calls are request/response; no streaming, no client-side atomicity
/// across calls.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Fetch the active (non-archived) experiments of a project.
    async fn fetch_experiments(&self, project_id: &str) -> Result<Vec<Experiment>, StoreError>;

    /// Apply a partial update to one experiment row.
    async fn update_experiment(
        &self,
        id: &str,
        update: ExperimentUpdate,
    ) -> Result<Experiment, StoreError>;

    /// Fetch an experiment's variants, control first.
    async fn fetch_variants(&self, experiment_id: &str) -> Result<Vec<Variant>, StoreError>;

    /// Apply a partial update to one variant row.
    async fn update_variant(&self, id: &str, update: VariantUpdate)
    -> Result<Variant, StoreError>;

    /// Delete an experiment row (variants and notes cascade server-side).
    async fn delete_experiment(&self, id: &str) -> Result<(), StoreError>;
}

impl RecordStore for StoreService {
    async fn fetch_experiments(&self, project_id: &str) -> Result<Vec<Experiment>, StoreError> {
        self.list_experiments(project_id, false).await
    }

    async fn update_experiment(
        &self,
        id: &str,
        update: ExperimentUpdate,
    ) -> Result<Experiment, StoreError> {
        Self::update_experiment(self, id, update).await
    }

    async fn fetch_variants(&self, experiment_id: &str) -> Result<Vec<Variant>, StoreError> {
        self.list_variants(experiment_id).await
    }

    async fn update_variant(
        &self,
        id: &str,
        update: VariantUpdate,
    ) -> Result<Variant, StoreError> {
        Self::update_variant(self, id, update).await
    }

    async fn delete_experiment(&self, id: &str) -> Result<(), StoreError> {
        Self::delete_experiment(self, id).await
    }
}

// Borrowed form, so a caller can keep using its service while a controller
// holds it.
impl RecordStore for &StoreService {
    async fn fetch_experiments(&self, project_id: &str) -> Result<Vec<Experiment>, StoreError> {
        self.list_experiments(project_id, false).await
    }

    async fn update_experiment(
        &self,
        id: &str,
        update: ExperimentUpdate,
    ) -> Result<Experiment, StoreError> {
        StoreService::update_experiment(self, id, update).await
    }

    async fn fetch_variants(&self, experiment_id: &str) -> Result<Vec<Variant>, StoreError> {
        self.list_variants(experiment_id).await
    }

    async fn update_variant(
        &self,
        id: &str,
        update: VariantUpdate,
    ) -> Result<Variant, StoreError> {
        StoreService::update_variant(self, id, update).await
    }

    async fn delete_experiment(&self, id: &str) -> Result<(), StoreError> {
        StoreService::delete_experiment(self, id).await
    }
}
