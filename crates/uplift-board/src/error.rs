//! Board workflow error types.

use std::fmt;

use thiserror::Error;
use uplift_store::error::StoreError;

/// Which form field a validation error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    PlannedStart,
    PlannedEnd,
    ActualStart,
    ActualEnd,
    Winner,
}

impl FormField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlannedStart => "planned_start_date",
            Self::PlannedEnd => "planned_end_date",
            Self::ActualStart => "actual_start_date",
            Self::ActualEnd => "actual_end_date",
            Self::Winner => "winner_variant_id",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field-scoped validation failure. The pending request stays open; the
/// UI flags exactly this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors from the board workflow. None are fatal: all scope to the single
/// pending transition and leave the rest of the board interactive.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Local validation failed; the request remains open with these
    /// field-scoped errors and no store call was made.
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// A gated drag was attempted while another request is pending.
    #[error("A stage transition is already in progress")]
    RequestPending,

    /// Submit or cancel called with no request open.
    #[error("No stage transition is pending")]
    NoPendingRequest,

    /// The dragged card id is not on the board.
    #[error("Unknown experiment: {0}")]
    UnknownExperiment(String),

    /// The backing store failed; the request stays open so the user can
    /// resubmit without re-entering data.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
