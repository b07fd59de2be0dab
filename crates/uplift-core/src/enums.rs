//! Status, category, outcome, and role enums for Uplift.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ExperimentStatus` carries the board metadata the kanban controller needs:
//! which statuses are standing columns and which targets are gated behind a
//! data-collection step.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ExperimentStatus
// ---------------------------------------------------------------------------

/// Position of an experiment in the CRO workflow.
///
/// ```text
/// backlog → planned → running → completed → archived
///                             → paused
/// ```
///
/// Any column may be dropped onto any other column; only the TARGET status
/// decides whether the move is gated (see [`Self::is_gated`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentStatus {
    Backlog,
    Planned,
    Running,
    Paused,
    Completed,
    Archived,
}

impl ExperimentStatus {
    /// Standing columns of the primary board, in fixed display order.
    ///
    /// Paused is reachable as a drop target but is driven by the pause
    /// action rather than shown as a column; Archived is excluded entirely.
    pub const BOARD_COLUMNS: [Self; 4] = [Self::Backlog, Self::Planned, Self::Running, Self::Completed];

    /// Whether moving an experiment INTO this status requires a
    /// data-collection step before the write may commit.
    #[must_use]
    pub const fn is_gated(self) -> bool {
        matches!(
            self,
            Self::Planned | Self::Running | Self::Completed | Self::Paused
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Planned => "planned",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

impl Default for ExperimentStatus {
    /// A missing or null status reads as Backlog.
    fn default() -> Self {
        Self::Backlog
    }
}

impl fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExperimentCategory
// ---------------------------------------------------------------------------

/// What kind of change an experiment tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentCategory {
    FormTest,
    ContentChanges,
    TrustValue,
    DesignChanges,
    CopyChanges,
    PricingTest,
    Navigation,
    Other,
}

impl ExperimentCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormTest => "form_test",
            Self::ContentChanges => "content_changes",
            Self::TrustValue => "trust_value",
            Self::DesignChanges => "design_changes",
            Self::CopyChanges => "copy_changes",
            Self::PricingTest => "pricing_test",
            Self::Navigation => "navigation",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExperimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Concluding verdict of a completed experiment.
///
/// `Winner` requires a winning-variant reference pointing at a non-control
/// variant of the same experiment; the other outcomes require (and clear)
/// none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Inconclusive,
    Winner,
    Loser,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inconclusive => "inconclusive",
            Self::Winner => "winner",
            Self::Loser => "loser",
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Inconclusive
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MemberRole
// ---------------------------------------------------------------------------

/// Role of a project member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Admin,
    Editor,
    Viewer,
}

impl MemberRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
