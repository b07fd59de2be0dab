use clap::Subcommand;

use super::subcommands::{
    BoardCommands, ExperimentCommands, MemberCommands, NoteCommands, ProjectCommands,
    VariantCommands,
};

/// Root subcommands of the `upl` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Project management.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Experiment records.
    Experiment {
        #[command(subcommand)]
        action: ExperimentCommands,
    },
    /// Experiment variants.
    Variant {
        #[command(subcommand)]
        action: VariantCommands,
    },
    /// Project members.
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
    /// Experiment notes.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Kanban board and stage transitions.
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
    /// Sync the local replica with the remote Turso database.
    Sync,
}
