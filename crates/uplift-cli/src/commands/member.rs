use serde::Serialize;

use uplift_core::enums::MemberRole;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MemberCommands;
use crate::commands::shared::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse {
    removed: String,
}

/// Handle `upl member`.
pub async fn handle(
    action: &MemberCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MemberCommands::Add { email, name, role } => {
            let project_id = ctx.require_project()?;
            let role: MemberRole = parse_enum(role, "role")?;
            let member = ctx
                .store
                .add_member(project_id, email, name.as_deref(), role)
                .await?;
            output(&member, flags.format)
        }
        MemberCommands::List => {
            let project_id = ctx.require_project()?;
            let members = ctx.store.list_members(project_id).await?;
            output(&members, flags.format)
        }
        MemberCommands::Remove { id } => {
            ctx.store.remove_member(id).await?;
            output(
                &RemoveResponse {
                    removed: id.clone(),
                },
                flags.format,
            )
        }
    }
}
