//! The transient Stage Transition Request and its form state.
//!
//! A request exists only for the duration of the modal interaction: built
//! when a drag (or explicit move) targets a gated status, discarded on
//! cancel or after a successful commit. Nothing here is persisted.

use chrono::NaiveDate;
use uplift_core::entities::{Experiment, Variant};
use uplift_core::enums::{ExperimentStatus, Outcome};

/// Lifecycle of a pending request.
///
/// ```text
/// (no request = Idle)
/// Collecting → Committing → (Idle on success)
///            ↑ (validation or store failure)
/// any state  → Idle on cancel
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Collecting,
    Committing,
}

/// Input collected for a pending transition.
///
/// Dates are optional until validation; the validator decides which ones the
/// target status requires. `variant_urls` pairs variant ids with the URL
/// entered for them (Running form only).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionForm {
    pub planned_start_date: Option<NaiveDate>,
    pub planned_end_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub outcome: Outcome,
    pub winner_variant_id: Option<String>,
    pub page_url: Option<String>,
    pub variant_urls: Vec<(String, String)>,
}

impl TransitionForm {
    /// Pre-populate the form with sensible defaults for the target status:
    /// today's date for actual start/end, and the experiment's existing
    /// planned dates when re-planning.
    #[must_use]
    pub fn prefill(target: ExperimentStatus, experiment: &Experiment, today: NaiveDate) -> Self {
        let mut form = Self::default();
        match target {
            ExperimentStatus::Planned => {
                form.planned_start_date = experiment.planned_start_date;
                form.planned_end_date = experiment.planned_end_date;
            }
            ExperimentStatus::Running => {
                form.actual_start_date = Some(today);
                form.page_url = experiment.page_url.clone();
            }
            ExperimentStatus::Completed => {
                form.actual_end_date = Some(today);
            }
            ExperimentStatus::Paused | ExperimentStatus::Backlog | ExperimentStatus::Archived => {}
        }
        form
    }

    /// Set the outcome. Switching away from Winner clears any held winner id
    /// from the pending form (not from storage until commit).
    pub fn set_outcome(&mut self, outcome: Outcome) {
        if outcome != Outcome::Winner {
            self.winner_variant_id = None;
        }
        self.outcome = outcome;
    }
}

/// A pending stage transition: (experiment, current status, requested
/// status, collected field values), plus the variant snapshot the Running
/// and Completed forms reference.
#[derive(Debug, Clone)]
pub struct StageTransitionRequest {
    pub experiment: Experiment,
    pub from: ExperimentStatus,
    pub target: ExperimentStatus,
    /// Control-first, fetched when the request opens.
    pub variants: Vec<Variant>,
    pub form: TransitionForm,
    pub state: RequestState,
}

impl StageTransitionRequest {
    #[must_use]
    pub fn open(
        experiment: Experiment,
        target: ExperimentStatus,
        variants: Vec<Variant>,
        today: NaiveDate,
    ) -> Self {
        let form = TransitionForm::prefill(target, &experiment, today);
        let from = experiment.status;
        Self {
            experiment,
            from,
            target,
            variants,
            form,
            state: RequestState::Collecting,
        }
    }
}
