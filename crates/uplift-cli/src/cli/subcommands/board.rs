use clap::{Args, Subcommand};

/// Kanban board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BoardCommands {
    /// Show the board: Backlog, Planned, Running, Completed columns.
    Show,
    /// Move an experiment to another stage, collecting gated fields from flags.
    Move(BoardMoveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BoardMoveArgs {
    /// Experiment id to move.
    pub experiment: String,
    /// Target status: backlog, planned, running, paused, completed, archived
    pub status: String,

    /// Planned start date (YYYY-MM-DD), required for planned.
    #[arg(long)]
    pub planned_start: Option<String>,
    /// Planned end date (YYYY-MM-DD), required for planned.
    #[arg(long)]
    pub planned_end: Option<String>,
    /// Actual start date (YYYY-MM-DD); defaults to today for running.
    #[arg(long)]
    pub actual_start: Option<String>,
    /// Actual end date (YYYY-MM-DD); defaults to today for completed.
    #[arg(long)]
    pub actual_end: Option<String>,
    /// Outcome for completed: inconclusive, winner, loser.
    #[arg(long)]
    pub outcome: Option<String>,
    /// Winning variant id, required when --outcome winner.
    #[arg(long)]
    pub winner: Option<String>,
    /// Live page URL for the running form.
    #[arg(long)]
    pub page_url: Option<String>,
    /// Per-variant URL as id=url; repeatable.
    #[arg(long = "variant-url", value_name = "ID=URL")]
    pub variant_urls: Vec<String>,
}
