//! The notification surface: human-readable success/partial-failure strings
//! the UI shows as toasts or inline text. Error strings come from
//! [`crate::BoardError`]'s `Display`; no structured error codes exist.

use std::fmt;

use uplift_core::enums::ExperimentStatus;

/// A human-readable outcome of a board action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A gated transition committed.
    TransitionCommitted {
        experiment_name: String,
        status: ExperimentStatus,
    },
    /// An ungated move committed directly.
    MoveCommitted {
        experiment_name: String,
        status: ExperimentStatus,
    },
    /// The experiment row committed but one or more variant URL writes
    /// failed. The next refresh shows the persisted state; the user must
    /// re-save the URLs that failed.
    VariantUrlSaveFailed {
        experiment_name: String,
        variant_ids: Vec<String>,
    },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransitionCommitted {
                experiment_name,
                status,
            } => write!(f, "{experiment_name} moved to {status}"),
            Self::MoveCommitted {
                experiment_name,
                status,
            } => write!(f, "{experiment_name} moved to {status}"),
            Self::VariantUrlSaveFailed {
                experiment_name,
                variant_ids,
            } => write!(
                f,
                "{experiment_name} transitioned, but variant URL(s) failed to save: {}",
                variant_ids.join(", ")
            ),
        }
    }
}
