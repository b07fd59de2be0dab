//! The Stage Transition Validator.
//!
//! Pure and synchronous: given a target status and the current experiment,
//! variant set, and form input, either produce the exact writes the
//! transition commits or a list of field-scoped errors. No store access —
//! validation never needs the network, only commit does.
//!
//! Gating depends on the TARGET status alone; the current status never
//! restricts a move.

use chrono::NaiveDate;

use uplift_core::entities::{Experiment, Variant};
use uplift_core::enums::{ExperimentStatus, Outcome};
use uplift_store::updates::experiment::{ExperimentUpdate, ExperimentUpdateBuilder};
use uplift_store::updates::variant::{VariantUpdate, VariantUpdateBuilder};

use crate::error::{FieldError, FormField};
use crate::request::TransitionForm;

/// The derived writes of a validated transition: exactly one experiment
/// update, plus — for Running only — one variant update per non-empty URL.
///
/// The variant writes are independent calls, not a transaction; the store
/// offers no multi-row atomicity and the workflow does not pretend otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPayload {
    pub experiment: ExperimentUpdate,
    pub variant_urls: Vec<(String, VariantUpdate)>,
}

/// Variants eligible to be picked as winner: everything except controls.
#[must_use]
pub fn winner_candidates(variants: &[Variant]) -> Vec<&Variant> {
    variants.iter().filter(|v| !v.is_control).collect()
}

/// Validate a transition into `target` and build its payload.
///
/// `today` is the commit-time date used for the Paused end timestamp;
/// passing it in keeps the function pure.
///
/// # Errors
///
/// Returns every field-scoped problem at once so the form can flag them all.
pub fn validate(
    target: ExperimentStatus,
    experiment: &Experiment,
    variants: &[Variant],
    form: &TransitionForm,
    today: NaiveDate,
) -> Result<TransitionPayload, Vec<FieldError>> {
    let _ = experiment; // gating is target-only; the experiment is here for parity with callers
    match target {
        ExperimentStatus::Planned => validate_planned(form),
        ExperimentStatus::Running => build_running(form, variants),
        ExperimentStatus::Completed => validate_completed(form, variants),
        ExperimentStatus::Paused => Ok(TransitionPayload {
            experiment: ExperimentUpdateBuilder::new()
                .status(ExperimentStatus::Paused)
                .actual_end_date(Some(today))
                .build(),
            variant_urls: Vec::new(),
        }),
        ExperimentStatus::Backlog | ExperimentStatus::Archived => Ok(TransitionPayload {
            experiment: ExperimentUpdateBuilder::new().status(target).build(),
            variant_urls: Vec::new(),
        }),
    }
}

fn validate_planned(form: &TransitionForm) -> Result<TransitionPayload, Vec<FieldError>> {
    let mut errors = Vec::new();
    if form.planned_start_date.is_none() {
        errors.push(FieldError::new(
            FormField::PlannedStart,
            "expected start date is required",
        ));
    }
    if form.planned_end_date.is_none() {
        errors.push(FieldError::new(
            FormField::PlannedEnd,
            "expected end date is required",
        ));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TransitionPayload {
        experiment: ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Planned)
            .planned_start_date(form.planned_start_date)
            .planned_end_date(form.planned_end_date)
            .build(),
        variant_urls: Vec::new(),
    })
}

fn build_running(
    form: &TransitionForm,
    variants: &[Variant],
) -> Result<TransitionPayload, Vec<FieldError>> {
    let Some(start) = form.actual_start_date else {
        return Err(vec![FieldError::new(
            FormField::ActualStart,
            "actual start date is required",
        )]);
    };

    let mut builder = ExperimentUpdateBuilder::new()
        .status(ExperimentStatus::Running)
        .actual_start_date(Some(start));
    if let Some(url) = form.page_url.as_deref().filter(|u| !u.trim().is_empty()) {
        builder = builder.page_url(Some(url.to_string()));
    }

    // Only non-empty URLs for variants that actually exist are persisted,
    // each to its own row.
    let variant_urls = form
        .variant_urls
        .iter()
        .filter(|(id, url)| {
            !url.trim().is_empty() && variants.iter().any(|v| &v.id == id)
        })
        .map(|(id, url)| {
            (
                id.clone(),
                VariantUpdateBuilder::new()
                    .target_url(Some(url.trim().to_string()))
                    .build(),
            )
        })
        .collect();

    Ok(TransitionPayload {
        experiment: builder.build(),
        variant_urls,
    })
}

fn validate_completed(
    form: &TransitionForm,
    variants: &[Variant],
) -> Result<TransitionPayload, Vec<FieldError>> {
    let mut errors = Vec::new();
    if form.actual_end_date.is_none() {
        errors.push(FieldError::new(
            FormField::ActualEnd,
            "actual end date is required",
        ));
    }

    let winner = if form.outcome == Outcome::Winner {
        let candidates = winner_candidates(variants);
        match form.winner_variant_id.as_deref() {
            Some(id) if candidates.iter().any(|v| v.id == id) => Some(id.to_string()),
            _ => {
                errors.push(FieldError::new(FormField::Winner, "must select a winner"));
                None
            }
        }
    } else {
        None
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TransitionPayload {
        experiment: ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Completed)
            .actual_end_date(form.actual_end_date)
            .outcome(Some(form.outcome))
            // Null unless the outcome is Winner.
            .winner_variant_id(winner)
            .build(),
        variant_urls: Vec::new(),
    })
}
