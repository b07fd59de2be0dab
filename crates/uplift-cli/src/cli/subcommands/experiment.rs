use clap::Subcommand;

/// Experiment entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExperimentCommands {
    /// Create an experiment (starts in backlog).
    Create {
        name: String,
        /// Category: form_test, content_changes, trust_value, design_changes,
        /// copy_changes, pricing_test, navigation, other
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long)]
        kpi: Option<String>,
        #[arg(long)]
        hypothesis: Option<String>,
    },
    /// List the project's experiments.
    List {
        #[arg(long)]
        include_archived: bool,
    },
    /// Get an experiment by id.
    Get { id: String },
    /// Update experiment fields (never use this to change status; see `upl board move`).
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        kpi: Option<String>,
        #[arg(long)]
        hypothesis: Option<String>,
        #[arg(long)]
        page_url: Option<String>,
        /// PIE potential score, 1-10.
        #[arg(long)]
        potential: Option<i64>,
        /// PIE importance score, 1-10.
        #[arg(long)]
        importance: Option<i64>,
        /// PIE ease score, 1-10.
        #[arg(long)]
        ease: Option<i64>,
    },
    /// Delete an experiment and its variants and notes.
    Delete { id: String },
}
