use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Variant;
use crate::enums::{ExperimentCategory, ExperimentStatus, Outcome};

/// A single CRO test on a client project, moving through the kanban workflow.
///
/// Dates are day-granular: `planned_*` hold the scheduled window set when the
/// experiment moves to Planned; `actual_*` are set by the Running, Completed,
/// and Paused transitions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Experiment {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub test_number: i64,
    pub category: ExperimentCategory,
    /// Null in storage reads as Backlog.
    #[serde(default)]
    pub status: ExperimentStatus,
    pub primary_kpi: Option<String>,
    pub hypothesis: Option<String>,
    /// Page under test; set (optionally) by the Running transition.
    pub page_url: Option<String>,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_end_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub outcome: Option<Outcome>,
    /// Must reference a non-control variant of this experiment, and only
    /// when `outcome` is `Winner`. See [`Self::winner_consistent`].
    pub winner_variant_id: Option<String>,
    /// PIE prioritization inputs (1..=10). Score is computed, never stored.
    pub pie_potential: Option<i64>,
    pub pie_importance: Option<i64>,
    pub pie_ease: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experiment {
    /// PIE score: mean of Potential/Importance/Ease, if all three are set.
    #[must_use]
    pub fn pie_score(&self) -> Option<f64> {
        match (self.pie_potential, self.pie_importance, self.pie_ease) {
            (Some(p), Some(i), Some(e)) => {
                #[allow(clippy::cast_precision_loss)]
                Some((p + i + e) as f64 / 3.0)
            }
            _ => None,
        }
    }

    /// Whether outcome and winner reference are mutually consistent against
    /// the given variant set: the winner id is present iff the outcome is
    /// `Winner`, and points at a non-control variant of this experiment.
    #[must_use]
    pub fn winner_consistent(&self, variants: &[Variant]) -> bool {
        match (self.outcome, self.winner_variant_id.as_deref()) {
            (Some(Outcome::Winner), Some(winner_id)) => variants
                .iter()
                .any(|v| v.id == winner_id && v.experiment_id == self.id && !v.is_control),
            (Some(Outcome::Winner), None) => false,
            (_, Some(_)) => false,
            (_, None) => true,
        }
    }
}
