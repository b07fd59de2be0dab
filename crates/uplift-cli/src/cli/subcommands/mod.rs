pub mod board;
pub mod experiment;
pub mod member;
pub mod note;
pub mod project;
pub mod variant;

pub use board::{BoardCommands, BoardMoveArgs};
pub use experiment::ExperimentCommands;
pub use member::MemberCommands;
pub use note::NoteCommands;
pub use project::ProjectCommands;
pub use variant::VariantCommands;
