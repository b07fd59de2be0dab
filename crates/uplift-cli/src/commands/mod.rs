use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::context::AppContext;

pub mod board;
pub mod experiment;
pub mod member;
pub mod note;
pub mod project;
pub mod shared;
pub mod sync;
pub mod variant;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => project::handle(&action, ctx, flags).await,
        Commands::Experiment { action } => experiment::handle(&action, ctx, flags).await,
        Commands::Variant { action } => variant::handle(&action, ctx, flags).await,
        Commands::Member { action } => member::handle(&action, ctx, flags).await,
        Commands::Note { action } => note::handle(&action, ctx, flags).await,
        Commands::Board { action } => board::handle(&action, ctx, flags).await,
        Commands::Sync => sync::handle(ctx, flags).await,
    }
}
