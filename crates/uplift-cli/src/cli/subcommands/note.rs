use clap::Subcommand;

/// Experiment note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// Add a note to an experiment.
    Add {
        experiment: String,
        body: String,
        #[arg(long)]
        author: Option<String>,
    },
    /// List an experiment's notes, newest first.
    List { experiment: String },
}
