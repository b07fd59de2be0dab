use anyhow::bail;
use serde::Serialize;

use uplift_board::{BoardController, BoardError, DragSink, DropOutcome, TransitionForm};
use uplift_core::entities::Experiment;
use uplift_core::enums::{ExperimentStatus, Outcome};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{BoardCommands, BoardMoveArgs};
use crate::commands::shared::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ColumnResponse {
    status: ExperimentStatus,
    count: usize,
    experiments: Vec<CardResponse>,
}

#[derive(Debug, Serialize)]
struct CardResponse {
    id: String,
    test_number: i64,
    name: String,
    category: String,
    pie_score: Option<f64>,
}

impl CardResponse {
    fn from_experiment(experiment: &Experiment) -> Self {
        Self {
            id: experiment.id.clone(),
            test_number: experiment.test_number,
            name: experiment.name.clone(),
            category: experiment.category.as_str().to_string(),
            pie_score: experiment.pie_score(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MoveResponse {
    experiment: String,
    status: ExperimentStatus,
    message: String,
}

/// Handle `upl board`.
pub async fn handle(
    action: &BoardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project_id = ctx.require_project()?;
    let mut controller = BoardController::new(&ctx.store, project_id);
    controller.refresh().await?;

    match action {
        BoardCommands::Show => {
            let columns = controller
                .columns()
                .into_iter()
                .map(|column| ColumnResponse {
                    status: column.status,
                    count: column.experiments.len(),
                    experiments: column
                        .experiments
                        .iter()
                        .map(|e| CardResponse::from_experiment(e))
                        .collect(),
                })
                .collect::<Vec<_>>();
            output(&columns, flags.format)
        }
        BoardCommands::Move(args) => handle_move(args, &mut controller, flags).await,
    }
}

async fn handle_move<S: uplift_board::RecordStore>(
    args: &BoardMoveArgs,
    controller: &mut BoardController<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target: ExperimentStatus = parse_enum(&args.status, "status")?;

    controller.on_pickup(&args.experiment)?;
    let outcome = controller.on_drop(&args.experiment, Some(target)).await?;

    let notification = match outcome {
        DropOutcome::Ignored => {
            bail!("experiment is already in '{target}'");
        }
        DropOutcome::Committed(notification) => notification,
        DropOutcome::FormOpened => {
            let form = build_form(args, controller)?;
            match controller.submit(form).await {
                Ok(notification) => notification,
                Err(BoardError::Validation(errors)) => {
                    for error in &errors {
                        eprintln!("  {error}");
                    }
                    bail!("transition to '{target}' rejected ({} field error(s))", errors.len());
                }
                Err(error) => return Err(error.into()),
            }
        }
    };

    output(
        &MoveResponse {
            experiment: args.experiment.clone(),
            status: target,
            message: notification.to_string(),
        },
        flags.format,
    )
}

/// Start from the controller's prefilled form and overlay the flags the user
/// passed.
fn build_form<S: uplift_board::RecordStore>(
    args: &BoardMoveArgs,
    controller: &mut BoardController<S>,
) -> anyhow::Result<TransitionForm> {
    let mut form = controller
        .pending_form_mut()
        .ok_or_else(|| anyhow::anyhow!("no transition form is open"))?
        .clone();

    if let Some(ref raw) = args.planned_start {
        form.planned_start_date = Some(parse_date(raw, "planned-start")?);
    }
    if let Some(ref raw) = args.planned_end {
        form.planned_end_date = Some(parse_date(raw, "planned-end")?);
    }
    if let Some(ref raw) = args.actual_start {
        form.actual_start_date = Some(parse_date(raw, "actual-start")?);
    }
    if let Some(ref raw) = args.actual_end {
        form.actual_end_date = Some(parse_date(raw, "actual-end")?);
    }
    if let Some(ref raw) = args.outcome {
        let outcome: Outcome = parse_enum(raw, "outcome")?;
        form.set_outcome(outcome);
    }
    if let Some(ref winner) = args.winner {
        form.winner_variant_id = Some(winner.clone());
    }
    if let Some(ref page_url) = args.page_url {
        form.page_url = Some(page_url.clone());
    }
    for raw in &args.variant_urls {
        let (id, url) = raw
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("invalid --variant-url '{raw}' (expected ID=URL)"))?;
        form.variant_urls.push((id.to_string(), url.to_string()));
    }

    Ok(form)
}
