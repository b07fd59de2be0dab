use clap::Subcommand;

/// Variant entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VariantCommands {
    /// Add a variant to an experiment.
    Add {
        experiment: String,
        name: String,
        /// Mark this variant as the control.
        #[arg(long)]
        control: bool,
        /// Traffic split percentage.
        #[arg(long, default_value_t = 50)]
        split: i64,
        #[arg(long)]
        url: Option<String>,
    },
    /// List an experiment's variants, control first.
    List { experiment: String },
    /// Update a variant.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        split: Option<i64>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        sessions: Option<i64>,
        #[arg(long)]
        conversions: Option<i64>,
    },
    /// Delete a non-control variant.
    Delete { id: String },
}
