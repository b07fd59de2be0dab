use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: String,
}

/// Handle `upl project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create {
            name,
            client,
            base_url,
        } => {
            let project = ctx
                .store
                .create_project(name, client.as_deref(), base_url.as_deref())
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::List => {
            let projects = ctx.store.list_projects().await?;
            output(&projects, flags.format)
        }
        ProjectCommands::Get { id } => {
            let project = ctx.store.get_project(id).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            client,
            base_url,
        } => {
            let project = ctx
                .store
                .update_project(
                    id,
                    name.as_deref(),
                    client.as_ref().map(|c| Some(c.as_str())),
                    base_url.as_ref().map(|u| Some(u.as_str())),
                )
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::Delete { id } => {
            ctx.store.delete_project(id).await?;
            output(
                &DeleteResponse {
                    deleted: id.clone(),
                },
                flags.format,
            )
        }
    }
}
