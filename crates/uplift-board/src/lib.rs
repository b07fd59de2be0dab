//! # uplift-board
//!
//! The kanban stage-transition workflow: the one place Uplift enforces
//! non-trivial business rules.
//!
//! - [`validator`] decides, purely and synchronously, what a move into a
//!   target status requires and what it writes.
//! - [`request`] holds the transient Stage Transition Request while the
//!   form is open.
//! - [`controller`] owns the per-project experiment list, partitions it
//!   into columns, and mediates drag gestures into transition requests.
//! - [`store`] is the record-store seam the controller consumes;
//!   [`gesture`] is the drag-layer seam it implements.
//!
//! Everything here is testable without a UI: drive the [`gesture::DragSink`]
//! interface with synthetic events against a mock [`store::RecordStore`].

pub mod controller;
pub mod error;
pub mod gesture;
pub mod notify;
pub mod request;
pub mod store;
pub mod validator;

pub use controller::{BoardColumn, BoardController, DropOutcome};
pub use error::{BoardError, FieldError, FormField};
pub use gesture::DragSink;
pub use notify::Notification;
pub use request::{RequestState, StageTransitionRequest, TransitionForm};
pub use store::RecordStore;
pub use validator::{TransitionPayload, validate, winner_candidates};
