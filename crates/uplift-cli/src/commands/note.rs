use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upl note`.
pub async fn handle(
    action: &NoteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NoteCommands::Add {
            experiment,
            body,
            author,
        } => {
            let note = ctx.store.add_note(experiment, author.as_deref(), body).await?;
            output(&note, flags.format)
        }
        NoteCommands::List { experiment } => {
            let notes = ctx.store.list_notes(experiment).await?;
            output(&notes, flags.format)
        }
    }
}
