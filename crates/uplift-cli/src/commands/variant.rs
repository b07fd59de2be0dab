use serde::Serialize;

use uplift_store::updates::variant::VariantUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VariantCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: String,
}

/// Handle `upl variant`.
pub async fn handle(
    action: &VariantCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VariantCommands::Add {
            experiment,
            name,
            control,
            split,
            url,
        } => {
            let variant = ctx
                .store
                .create_variant(experiment, name, *control, *split, url.as_deref())
                .await?;
            output(&variant, flags.format)
        }
        VariantCommands::List { experiment } => {
            let variants = ctx.store.list_variants(experiment).await?;
            output(&variants, flags.format)
        }
        VariantCommands::Update {
            id,
            name,
            split,
            url,
            sessions,
            conversions,
        } => {
            let mut builder = VariantUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.clone());
            }
            if let Some(split) = split {
                builder = builder.traffic_split(*split);
            }
            if let Some(url) = url {
                builder = builder.target_url(Some(url.clone()));
            }
            if let Some(sessions) = sessions {
                builder = builder.sessions(*sessions);
            }
            if let Some(conversions) = conversions {
                builder = builder.conversions(*conversions);
            }

            let variant = ctx.store.update_variant(id, builder.build()).await?;
            output(&variant, flags.format)
        }
        VariantCommands::Delete { id } => {
            ctx.store.delete_variant(id).await?;
            output(
                &DeleteResponse {
                    deleted: id.clone(),
                },
                flags.format,
            )
        }
    }
}
