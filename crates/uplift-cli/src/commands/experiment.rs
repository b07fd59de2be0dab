use serde::Serialize;

use uplift_core::enums::ExperimentCategory;
use uplift_store::updates::experiment::ExperimentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExperimentCommands;
use crate::commands::shared::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: String,
}

/// Handle `upl experiment`.
pub async fn handle(
    action: &ExperimentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExperimentCommands::Create {
            name,
            category,
            kpi,
            hypothesis,
        } => {
            let project_id = ctx.require_project()?;
            let category: ExperimentCategory = parse_enum(category, "category")?;
            let experiment = ctx
                .store
                .create_experiment(
                    project_id,
                    name,
                    category,
                    kpi.as_deref(),
                    hypothesis.as_deref(),
                )
                .await?;
            output(&experiment, flags.format)
        }
        ExperimentCommands::List { include_archived } => {
            let project_id = ctx.require_project()?;
            let experiments = ctx
                .store
                .list_experiments(project_id, *include_archived)
                .await?;
            output(&experiments, flags.format)
        }
        ExperimentCommands::Get { id } => {
            let experiment = ctx.store.get_experiment(id).await?;
            output(&experiment, flags.format)
        }
        ExperimentCommands::Update {
            id,
            name,
            category,
            kpi,
            hypothesis,
            page_url,
            potential,
            importance,
            ease,
        } => {
            let mut builder = ExperimentUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.clone());
            }
            if let Some(category) = category {
                builder = builder.category(parse_enum(category, "category")?);
            }
            if let Some(kpi) = kpi {
                builder = builder.primary_kpi(Some(kpi.clone()));
            }
            if let Some(hypothesis) = hypothesis {
                builder = builder.hypothesis(Some(hypothesis.clone()));
            }
            if let Some(page_url) = page_url {
                builder = builder.page_url(Some(page_url.clone()));
            }
            if let Some(potential) = potential {
                builder = builder.pie_potential(Some(*potential));
            }
            if let Some(importance) = importance {
                builder = builder.pie_importance(Some(*importance));
            }
            if let Some(ease) = ease {
                builder = builder.pie_ease(Some(*ease));
            }

            let experiment = ctx.store.update_experiment(id, builder.build()).await?;
            output(&experiment, flags.format)
        }
        ExperimentCommands::Delete { id } => {
            ctx.store.delete_experiment(id).await?;
            output(
                &DeleteResponse {
                    deleted: id.clone(),
                },
                flags.format,
            )
        }
    }
}
