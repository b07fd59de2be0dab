//! The Kanban Board Controller.
//!
//! Owns the cached experiment list for the active project, partitions it
//! into the fixed stage columns, and mediates drag gestures into stage
//! transition requests. Holds at most one pending request; the interaction
//! layer is modal while a form is open.
//!
//! After any commit — gated or direct — the controller refetches the whole
//! list rather than patching the moved card, so server-computed fields never
//! diverge from client state.

use chrono::Utc;

use uplift_core::entities::Experiment;
use uplift_core::enums::ExperimentStatus;

use crate::error::BoardError;
use crate::gesture::DragSink;
use crate::notify::Notification;
use crate::request::{RequestState, StageTransitionRequest, TransitionForm};
use crate::store::RecordStore;
use crate::validator;

/// One stage column of the board.
#[derive(Debug)]
pub struct BoardColumn<'a> {
    pub status: ExperimentStatus,
    pub experiments: Vec<&'a Experiment>,
}

/// What a drop gesture resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No valid target, or dropped back onto the current column.
    Ignored,
    /// The target is gated: a Stage Transition Request is now open and the
    /// card has NOT moved.
    FormOpened,
    /// The target is ungated: the status write committed immediately.
    Committed(Notification),
}

/// Board state and drag mediation for one project.
pub struct BoardController<S: RecordStore> {
    store: S,
    project_id: String,
    experiments: Vec<Experiment>,
    pending: Option<StageTransitionRequest>,
    dragging: Option<String>,
}

impl<S: RecordStore> BoardController<S> {
    /// Create a controller with an empty cache; call [`Self::refresh`] to load.
    #[must_use]
    pub fn new(store: S, project_id: impl Into<String>) -> Self {
        Self {
            store,
            project_id: project_id.into(),
            experiments: Vec::new(),
            pending: None,
            dragging: None,
        }
    }

    /// Refetch the project's experiment list (Archived excluded by the store).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Store` if the fetch fails; the stale cache is kept.
    pub async fn refresh(&mut self) -> Result<(), BoardError> {
        let experiments = self.store.fetch_experiments(&self.project_id).await?;
        self.experiments = experiments;
        Ok(())
    }

    /// The cached experiment list.
    #[must_use]
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// The pending transition request, if a form is open.
    #[must_use]
    pub const fn pending(&self) -> Option<&StageTransitionRequest> {
        self.pending.as_ref()
    }

    /// Mutable access to the pending request's form (outcome switches, date
    /// edits) while it is Collecting.
    pub fn pending_form_mut(&mut self) -> Option<&mut TransitionForm> {
        self.pending
            .as_mut()
            .filter(|r| r.state == RequestState::Collecting)
            .map(|r| &mut r.form)
    }

    /// Partition the cached list into the fixed-order columns
    /// Backlog, Planned, Running, Completed. Paused and Archived cards are
    /// not standing columns and are omitted.
    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn<'_>> {
        ExperimentStatus::BOARD_COLUMNS
            .iter()
            .map(|&status| BoardColumn {
                status,
                experiments: self
                    .experiments
                    .iter()
                    .filter(|e| e.status == status)
                    .collect(),
            })
            .collect()
    }

    fn experiment(&self, id: &str) -> Result<&Experiment, BoardError> {
        self.experiments
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| BoardError::UnknownExperiment(id.to_string()))
    }

    /// Submit the pending form: validate, commit, refresh.
    ///
    /// On success the request is discarded and a [`Notification`] returned —
    /// [`Notification::VariantUrlSaveFailed`] when the experiment row
    /// committed but variant URL writes partially failed (no rollback).
    ///
    /// # Errors
    ///
    /// `BoardError::Validation` or `BoardError::Store` leave the request
    /// open (back in Collecting) so the user can fix or resubmit.
    pub async fn submit(&mut self, form: TransitionForm) -> Result<Notification, BoardError> {
        let today = Utc::now().date_naive();

        let (experiment_id, experiment_name, status, payload) = {
            let request = self.pending.as_mut().ok_or(BoardError::NoPendingRequest)?;
            request.form = form;
            request.state = RequestState::Committing;

            match validator::validate(
                request.target,
                &request.experiment,
                &request.variants,
                &request.form,
                today,
            ) {
                Ok(payload) => (
                    request.experiment.id.clone(),
                    request.experiment.name.clone(),
                    request.target,
                    payload,
                ),
                Err(errors) => {
                    request.state = RequestState::Collecting;
                    return Err(BoardError::Validation(errors));
                }
            }
        };

        // Exactly one update call to the experiment row.
        if let Err(e) = self
            .store
            .update_experiment(&experiment_id, payload.experiment)
            .await
        {
            if let Some(request) = self.pending.as_mut() {
                request.state = RequestState::Collecting;
            }
            return Err(BoardError::Store(e));
        }

        // Running only: one call per variant with a non-empty URL. These are
        // independent writes; failures after the experiment commit are
        // reported, not rolled back.
        let mut failed_variants = Vec::new();
        for (variant_id, update) in payload.variant_urls {
            if let Err(e) = self.store.update_variant(&variant_id, update).await {
                tracing::warn!(variant = %variant_id, error = %e, "variant URL write failed");
                failed_variants.push(variant_id);
            }
        }

        self.pending = None;
        tracing::debug!(experiment = %experiment_id, %status, "transition committed");

        self.refresh().await?;

        if failed_variants.is_empty() {
            Ok(Notification::TransitionCommitted {
                experiment_name,
                status,
            })
        } else {
            Ok(Notification::VariantUrlSaveFailed {
                experiment_name,
                variant_ids: failed_variants,
            })
        }
    }

    /// Delete a card's experiment outright and refetch the list.
    ///
    /// Blocked while a transition request is pending, like any other board
    /// mutation.
    ///
    /// # Errors
    ///
    /// `BoardError::RequestPending`, `BoardError::UnknownExperiment`, or
    /// `BoardError::Store` if the delete fails.
    pub async fn delete(&mut self, id: &str) -> Result<(), BoardError> {
        if self.pending.is_some() {
            return Err(BoardError::RequestPending);
        }
        self.experiment(id)?;
        self.store.delete_experiment(id).await?;
        tracing::debug!(experiment = %id, "experiment deleted");
        self.refresh().await
    }

    /// Discard the pending request. Synchronous, no store interaction; the
    /// card never left its column. Always available, a no-op when nothing
    /// is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<S: RecordStore> DragSink for BoardController<S> {
    fn on_pickup(&mut self, item_id: &str) -> Result<(), BoardError> {
        if self.pending.is_some() {
            return Err(BoardError::RequestPending);
        }
        self.experiment(item_id)?;
        self.dragging = Some(item_id.to_string());
        Ok(())
    }

    async fn on_drop(
        &mut self,
        item_id: &str,
        over_column: Option<ExperimentStatus>,
    ) -> Result<DropOutcome, BoardError> {
        self.dragging = None;

        let experiment = self.experiment(item_id)?.clone();
        let Some(target) = over_column else {
            return Ok(DropOutcome::Ignored);
        };
        if target == experiment.status {
            return Ok(DropOutcome::Ignored);
        }
        if self.pending.is_some() {
            return Err(BoardError::RequestPending);
        }

        if target.is_gated() {
            // The Running and Completed forms reference variants; fetch them
            // (control-first) before the form renders.
            let variants = match target {
                ExperimentStatus::Running | ExperimentStatus::Completed => {
                    self.store.fetch_variants(&experiment.id).await?
                }
                _ => Vec::new(),
            };
            let today = Utc::now().date_naive();
            self.pending = Some(StageTransitionRequest::open(
                experiment, target, variants, today,
            ));
            return Ok(DropOutcome::FormOpened);
        }

        // Ungated (Backlog, Archived): direct status write, then refetch.
        let payload = validator::validate(
            target,
            &experiment,
            &[],
            &TransitionForm::default(),
            Utc::now().date_naive(),
        )
        .map_err(BoardError::Validation)?;
        self.store
            .update_experiment(&experiment.id, payload.experiment)
            .await?;
        tracing::debug!(experiment = %experiment.id, status = %target, "direct move committed");
        self.refresh().await?;

        Ok(DropOutcome::Committed(Notification::MoveCommitted {
            experiment_name: experiment.name,
            status: target,
        }))
    }
}
