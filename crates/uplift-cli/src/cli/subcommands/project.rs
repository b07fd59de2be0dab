use clap::Subcommand;

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create {
        name: String,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        base_url: Option<String>,
    },
    /// List projects.
    List,
    /// Get a project by id.
    Get { id: String },
    /// Update a project.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Delete a project and everything under it.
    Delete { id: String },
}
