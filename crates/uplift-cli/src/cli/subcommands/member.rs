use clap::Subcommand;

/// Project member commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MemberCommands {
    /// Add a member to the project.
    Add {
        email: String,
        #[arg(long)]
        name: Option<String>,
        /// Role: admin, editor, viewer
        #[arg(long, default_value = "editor")]
        role: String,
    },
    /// List the project's members.
    List,
    /// Remove a member.
    Remove { id: String },
}
