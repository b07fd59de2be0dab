//! The drag-layer seam.
//!
//! The drag library reports pick-up and drop as plain identifiers; the board
//! consumes them through this minimal interface so the workflow can be
//! driven by synthetic events in tests, no pointer simulation needed.

use uplift_core::enums::ExperimentStatus;

use crate::controller::DropOutcome;
use crate::error::BoardError;

/// Receiver of drag events from the interaction layer.
///
/// Implemented by [`crate::BoardController`]. The layer exposes only one
/// active drag at a time; a pending transition request blocks new pickups.
#[allow(async_fn_in_trait)]
pub trait DragSink {
    /// A card was picked up.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the id is unknown or a request is pending.
    fn on_pickup(&mut self, item_id: &str) -> Result<(), BoardError>;

    /// The drag ended over `over_column` (`None` = no valid drop target).
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the drop cannot be mediated; store errors
    /// from a direct (ungated) commit pass through.
    async fn on_drop(
        &mut self,
        item_id: &str,
        over_column: Option<ExperimentStatus>,
    ) -> Result<DropOutcome, BoardError>;
}
