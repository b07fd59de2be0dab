//! Experiment update builder.

use chrono::NaiveDate;
use serde::Serialize;
use uplift_core::enums::{ExperimentCategory, ExperimentStatus, Outcome};

/// Partial update for an experiment row.
///
/// The stage-transition workflow builds these exclusively through
/// [`ExperimentUpdateBuilder`]; nothing else writes status, outcome, or the
/// winner reference.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExperimentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ExperimentCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExperimentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_kpi: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypothesis: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Option<Outcome>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_variant_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie_potential: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie_importance: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie_ease: Option<Option<i64>>,
}

impl ExperimentUpdate {
    /// Whether this update touches no columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.status.is_none()
            && self.primary_kpi.is_none()
            && self.hypothesis.is_none()
            && self.page_url.is_none()
            && self.planned_start_date.is_none()
            && self.planned_end_date.is_none()
            && self.actual_start_date.is_none()
            && self.actual_end_date.is_none()
            && self.outcome.is_none()
            && self.winner_variant_id.is_none()
            && self.pie_potential.is_none()
            && self.pie_importance.is_none()
            && self.pie_ease.is_none()
    }
}

pub struct ExperimentUpdateBuilder(ExperimentUpdate);

impl ExperimentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ExperimentUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: ExperimentCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn status(mut self, status: ExperimentStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn primary_kpi(mut self, primary_kpi: Option<String>) -> Self {
        self.0.primary_kpi = Some(primary_kpi);
        self
    }

    #[must_use]
    pub fn hypothesis(mut self, hypothesis: Option<String>) -> Self {
        self.0.hypothesis = Some(hypothesis);
        self
    }

    #[must_use]
    pub fn page_url(mut self, page_url: Option<String>) -> Self {
        self.0.page_url = Some(page_url);
        self
    }

    #[must_use]
    pub fn planned_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.planned_start_date = Some(date);
        self
    }

    #[must_use]
    pub fn planned_end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.planned_end_date = Some(date);
        self
    }

    #[must_use]
    pub fn actual_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.actual_start_date = Some(date);
        self
    }

    #[must_use]
    pub fn actual_end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.actual_end_date = Some(date);
        self
    }

    #[must_use]
    pub fn outcome(mut self, outcome: Option<Outcome>) -> Self {
        self.0.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn winner_variant_id(mut self, winner: Option<String>) -> Self {
        self.0.winner_variant_id = Some(winner);
        self
    }

    #[must_use]
    pub fn pie_potential(mut self, value: Option<i64>) -> Self {
        self.0.pie_potential = Some(value);
        self
    }

    #[must_use]
    pub fn pie_importance(mut self, value: Option<i64>) -> Self {
        self.0.pie_importance = Some(value);
        self
    }

    #[must_use]
    pub fn pie_ease(mut self, value: Option<i64>) -> Self {
        self.0.pie_ease = Some(value);
        self
    }

    #[must_use]
    pub fn build(self) -> ExperimentUpdate {
        self.0
    }
}

impl Default for ExperimentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
