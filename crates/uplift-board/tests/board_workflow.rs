//! End-to-end workflow tests: synthetic drag events through the `DragSink`
//! interface against a call-recording mock store.

use std::cell::RefCell;

use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;

use uplift_board::{
    BoardController, BoardError, DragSink, DropOutcome, FormField, Notification, RecordStore,
    RequestState, TransitionForm,
};
use uplift_core::entities::{Experiment, Variant};
use uplift_core::enums::{ExperimentCategory, ExperimentStatus, Outcome};
use uplift_store::error::StoreError;
use uplift_store::updates::experiment::{ExperimentUpdate, ExperimentUpdateBuilder};
use uplift_store::updates::variant::VariantUpdate;

const PROJECT: &str = "prj-11111111";

fn experiment(id: &str, name: &str, status: ExperimentStatus) -> Experiment {
    Experiment {
        id: id.into(),
        project_id: PROJECT.into(),
        name: name.into(),
        test_number: 1,
        category: ExperimentCategory::Other,
        status,
        primary_kpi: None,
        hypothesis: None,
        page_url: None,
        planned_start_date: None,
        planned_end_date: None,
        actual_start_date: None,
        actual_end_date: None,
        outcome: None,
        winner_variant_id: None,
        pie_potential: None,
        pie_importance: None,
        pie_ease: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn variant(id: &str, experiment_id: &str, is_control: bool) -> Variant {
    Variant {
        id: id.into(),
        experiment_id: experiment_id.into(),
        name: id.into(),
        is_control,
        traffic_split: 50,
        target_url: None,
        sessions: 0,
        conversions: 0,
        uplift_pct: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// In-memory store that records every mutation it receives and applies
/// status-relevant fields so refetches see committed moves.
#[derive(Default)]
struct MockStore {
    experiments: RefCell<Vec<Experiment>>,
    variants: RefCell<Vec<Variant>>,
    experiment_updates: RefCell<Vec<(String, ExperimentUpdate)>>,
    variant_updates: RefCell<Vec<(String, VariantUpdate)>>,
    deleted: RefCell<Vec<String>>,
    fail_next_experiment_update: RefCell<bool>,
    failing_variant_ids: RefCell<Vec<String>>,
}

impl MockStore {
    fn with_experiments(experiments: Vec<Experiment>) -> Self {
        Self {
            experiments: RefCell::new(experiments),
            ..Self::default()
        }
    }

    fn add_variants(&self, variants: Vec<Variant>) {
        self.variants.borrow_mut().extend(variants);
    }

    fn experiment_updates(&self) -> Vec<(String, ExperimentUpdate)> {
        self.experiment_updates.borrow().clone()
    }

    fn variant_updates(&self) -> Vec<(String, VariantUpdate)> {
        self.variant_updates.borrow().clone()
    }

    fn stored_status(&self, id: &str) -> ExperimentStatus {
        self.experiments
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.status)
            .unwrap()
    }
}

fn apply_update(experiment: &mut Experiment, update: &ExperimentUpdate) {
    if let Some(status) = update.status {
        experiment.status = status;
    }
    if let Some(date) = update.planned_start_date {
        experiment.planned_start_date = date;
    }
    if let Some(date) = update.planned_end_date {
        experiment.planned_end_date = date;
    }
    if let Some(date) = update.actual_start_date {
        experiment.actual_start_date = date;
    }
    if let Some(date) = update.actual_end_date {
        experiment.actual_end_date = date;
    }
    if let Some(outcome) = update.outcome {
        experiment.outcome = outcome;
    }
    if let Some(ref winner) = update.winner_variant_id {
        experiment.winner_variant_id = winner.clone();
    }
    if let Some(ref url) = update.page_url {
        experiment.page_url = url.clone();
    }
}

impl RecordStore for &MockStore {
    async fn fetch_experiments(&self, project_id: &str) -> Result<Vec<Experiment>, StoreError> {
        Ok(self
            .experiments
            .borrow()
            .iter()
            .filter(|e| e.project_id == project_id && e.status != ExperimentStatus::Archived)
            .cloned()
            .collect())
    }

    async fn update_experiment(
        &self,
        id: &str,
        update: ExperimentUpdate,
    ) -> Result<Experiment, StoreError> {
        if *self.fail_next_experiment_update.borrow() {
            *self.fail_next_experiment_update.borrow_mut() = false;
            return Err(StoreError::Query("connection reset".into()));
        }
        self.experiment_updates
            .borrow_mut()
            .push((id.to_string(), update.clone()));

        let mut experiments = self.experiments.borrow_mut();
        let experiment = experiments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NoResult)?;
        apply_update(experiment, &update);
        Ok(experiment.clone())
    }

    async fn fetch_variants(&self, experiment_id: &str) -> Result<Vec<Variant>, StoreError> {
        let mut variants: Vec<Variant> = self
            .variants
            .borrow()
            .iter()
            .filter(|v| v.experiment_id == experiment_id)
            .cloned()
            .collect();
        variants.sort_by_key(|v| !v.is_control);
        Ok(variants)
    }

    async fn update_variant(
        &self,
        id: &str,
        update: VariantUpdate,
    ) -> Result<Variant, StoreError> {
        if self.failing_variant_ids.borrow().iter().any(|f| f == id) {
            return Err(StoreError::Query("connection reset".into()));
        }
        self.variant_updates
            .borrow_mut()
            .push((id.to_string(), update.clone()));

        let mut variants = self.variants.borrow_mut();
        let variant = variants
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StoreError::NoResult)?;
        if let Some(ref url) = update.target_url {
            variant.target_url = url.clone();
        }
        Ok(variant.clone())
    }

    async fn delete_experiment(&self, id: &str) -> Result<(), StoreError> {
        let mut experiments = self.experiments.borrow_mut();
        let before = experiments.len();
        experiments.retain(|e| e.id != id);
        if experiments.len() == before {
            return Err(StoreError::NoResult);
        }
        self.variants.borrow_mut().retain(|v| v.experiment_id != id);
        self.deleted.borrow_mut().push(id.to_string());
        Ok(())
    }
}

async fn board<'a>(store: &'a MockStore) -> BoardController<&'a MockStore> {
    let mut controller = BoardController::new(store, PROJECT);
    controller.refresh().await.unwrap();
    controller
}

#[rstest]
#[case(ExperimentStatus::Planned)]
#[case(ExperimentStatus::Running)]
#[case(ExperimentStatus::Completed)]
#[case(ExperimentStatus::Paused)]
#[tokio::test]
async fn gated_drop_opens_form_without_moving(#[case] target: ExperimentStatus) {
    let from = ExperimentStatus::Backlog;
    let store = MockStore::with_experiments(vec![experiment("exp-1", "E", from)]);
    let mut board = board(&store).await;

    board.on_pickup("exp-1").unwrap();
    let outcome = board.on_drop("exp-1", Some(target)).await.unwrap();

    assert_eq!(outcome, DropOutcome::FormOpened);
    let request = board.pending().unwrap();
    assert_eq!(request.target, target);
    assert_eq!(request.from, from);
    assert_eq!(request.state, RequestState::Collecting);
    // The card did not move and nothing was written.
    assert_eq!(store.stored_status("exp-1"), from);
    assert!(store.experiment_updates().is_empty());
}

#[tokio::test]
async fn ungated_drop_commits_immediately() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Backlog,
    )]);
    let mut board = board(&store).await;

    let outcome = board
        .on_drop("exp-1", Some(ExperimentStatus::Archived))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Committed(Notification::MoveCommitted {
            experiment_name: "E".into(),
            status: ExperimentStatus::Archived,
        })
    );
    assert!(board.pending().is_none());
    let updates = store.experiment_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].1,
        ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Archived)
            .build()
    );
    // Archived cards drop out of the refetched board.
    assert!(board.experiments().is_empty());
}

#[tokio::test]
async fn drop_without_target_or_onto_same_column_is_noop() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Running,
    )]);
    let mut board = board(&store).await;

    assert_eq!(board.on_drop("exp-1", None).await.unwrap(), DropOutcome::Ignored);
    assert_eq!(
        board
            .on_drop("exp-1", Some(ExperimentStatus::Running))
            .await
            .unwrap(),
        DropOutcome::Ignored
    );
    assert!(board.pending().is_none());
    assert!(store.experiment_updates().is_empty());
}

#[tokio::test]
async fn unknown_card_is_rejected() {
    let store = MockStore::with_experiments(vec![]);
    let mut board = board(&store).await;
    assert!(matches!(
        board.on_pickup("exp-ghost"),
        Err(BoardError::UnknownExperiment(_))
    ));
}

#[tokio::test]
async fn planned_submit_rejects_missing_date_then_commits() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Backlog,
    )]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Planned))
        .await
        .unwrap();

    let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();

    let incomplete = TransitionForm {
        planned_start_date: Some(start),
        ..TransitionForm::default()
    };
    let err = board.submit(incomplete).await.unwrap_err();
    match err {
        BoardError::Validation(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, FormField::PlannedEnd);
        }
        other => panic!("expected validation error, got {other}"),
    }
    // Request stays open, nothing written.
    assert_eq!(board.pending().unwrap().state, RequestState::Collecting);
    assert!(store.experiment_updates().is_empty());

    let complete = TransitionForm {
        planned_start_date: Some(start),
        planned_end_date: Some(end),
        ..TransitionForm::default()
    };
    let note = board.submit(complete).await.unwrap();
    assert_eq!(
        note,
        Notification::TransitionCommitted {
            experiment_name: "E".into(),
            status: ExperimentStatus::Planned,
        }
    );
    assert!(board.pending().is_none());

    let updates = store.experiment_updates();
    assert_eq!(updates.len(), 1, "exactly one store update");
    assert_eq!(
        updates[0].1,
        ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Planned)
            .planned_start_date(Some(start))
            .planned_end_date(Some(end))
            .build()
    );
}

#[tokio::test]
async fn completed_winner_scenario() {
    // Experiment E in Running with variants {Control, B}; drag to Completed;
    // end 2024-03-01, outcome Winner, winner B.
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Running,
    )]);
    store.add_variants(vec![
        variant("var-control", "exp-1", true),
        variant("var-b", "exp-1", false),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Completed))
        .await
        .unwrap();

    // Winner without a selection is rejected.
    let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut form = TransitionForm {
        actual_end_date: Some(end),
        ..TransitionForm::default()
    };
    form.set_outcome(Outcome::Winner);
    let err = board.submit(form.clone()).await.unwrap_err();
    match err {
        BoardError::Validation(fields) => {
            assert_eq!(fields[0].field, FormField::Winner);
            assert_eq!(fields[0].message, "must select a winner");
        }
        other => panic!("expected validation error, got {other}"),
    }

    // Selecting B and resubmitting succeeds.
    form.winner_variant_id = Some("var-b".into());
    board.submit(form).await.unwrap();

    let updates = store.experiment_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].1,
        ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Completed)
            .actual_end_date(Some(end))
            .outcome(Some(Outcome::Winner))
            .winner_variant_id(Some("var-b".into()))
            .build()
    );
}

#[tokio::test]
async fn completed_inconclusive_needs_no_winner() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Running,
    )]);
    store.add_variants(vec![
        variant("var-control", "exp-1", true),
        variant("var-b", "exp-1", false),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Completed))
        .await
        .unwrap();

    let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let form = TransitionForm {
        actual_end_date: Some(end),
        ..TransitionForm::default()
    };
    board.submit(form).await.unwrap();

    let updates = store.experiment_updates();
    assert_eq!(
        updates[0].1,
        ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Completed)
            .actual_end_date(Some(end))
            .outcome(Some(Outcome::Inconclusive))
            .winner_variant_id(None)
            .build()
    );
}

#[tokio::test]
async fn switching_outcome_away_from_winner_clears_held_winner() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Running,
    )]);
    store.add_variants(vec![
        variant("var-control", "exp-1", true),
        variant("var-b", "exp-1", false),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Completed))
        .await
        .unwrap();

    let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    {
        let form = board.pending_form_mut().unwrap();
        form.actual_end_date = Some(end);
        form.set_outcome(Outcome::Winner);
        form.winner_variant_id = Some("var-b".into());
        form.set_outcome(Outcome::Loser);
        assert_eq!(form.winner_variant_id, None);
    }
    let form = board.pending().unwrap().form.clone();
    board.submit(form).await.unwrap();

    let updates = store.experiment_updates();
    assert_eq!(updates[0].1.outcome, Some(Some(Outcome::Loser)));
    assert_eq!(updates[0].1.winner_variant_id, Some(None));
}

#[tokio::test]
async fn running_writes_experiment_and_each_variant_url() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Planned,
    )]);
    store.add_variants(vec![
        variant("var-control", "exp-1", true),
        variant("var-b", "exp-1", false),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Running))
        .await
        .unwrap();

    let start = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let form = TransitionForm {
        actual_start_date: Some(start),
        page_url: Some("https://example.com/p".into()),
        variant_urls: vec![
            ("var-control".into(), "https://example.com/p".into()),
            ("var-b".into(), "https://example.com/p?v=b".into()),
        ],
        ..TransitionForm::default()
    };
    let note = board.submit(form).await.unwrap();
    assert_eq!(
        note,
        Notification::TransitionCommitted {
            experiment_name: "E".into(),
            status: ExperimentStatus::Running,
        }
    );

    assert_eq!(store.experiment_updates().len(), 1);
    let variant_updates = store.variant_updates();
    assert_eq!(variant_updates.len(), 2);
    assert!(variant_updates.iter().any(|(id, u)| {
        id == "var-b" && u.target_url == Some(Some("https://example.com/p?v=b".into()))
    }));
}

#[tokio::test]
async fn running_partial_variant_failure_is_reported_not_rolled_back() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Planned,
    )]);
    store.add_variants(vec![
        variant("var-control", "exp-1", true),
        variant("var-b", "exp-1", false),
    ]);
    store.failing_variant_ids.borrow_mut().push("var-b".into());

    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Running))
        .await
        .unwrap();

    let form = TransitionForm {
        actual_start_date: NaiveDate::from_ymd_opt(2024, 3, 5),
        variant_urls: vec![("var-b".into(), "https://example.com/p?v=b".into())],
        ..TransitionForm::default()
    };
    let note = board.submit(form).await.unwrap();

    assert_eq!(
        note,
        Notification::VariantUrlSaveFailed {
            experiment_name: "E".into(),
            variant_ids: vec!["var-b".into()],
        }
    );
    // The experiment write stands.
    assert_eq!(store.stored_status("exp-1"), ExperimentStatus::Running);
    assert!(board.pending().is_none());
}

#[tokio::test]
async fn store_failure_keeps_request_open_for_resubmit() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Backlog,
    )]);
    *store.fail_next_experiment_update.borrow_mut() = true;

    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Planned))
        .await
        .unwrap();

    let form = TransitionForm {
        planned_start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
        planned_end_date: NaiveDate::from_ymd_opt(2024, 4, 30),
        ..TransitionForm::default()
    };
    let err = board.submit(form.clone()).await.unwrap_err();
    assert!(matches!(err, BoardError::Store(_)));
    // Request stays open in Collecting; resubmitting the same data works.
    assert_eq!(board.pending().unwrap().state, RequestState::Collecting);

    board.submit(form).await.unwrap();
    assert_eq!(store.stored_status("exp-1"), ExperimentStatus::Planned);
}

#[tokio::test]
async fn cancel_discards_request_with_no_store_interaction() {
    let store = MockStore::with_experiments(vec![experiment(
        "exp-1",
        "E",
        ExperimentStatus::Running,
    )]);
    store.add_variants(vec![
        variant("var-control", "exp-1", true),
        variant("var-b", "exp-1", false),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Completed))
        .await
        .unwrap();

    board.cancel();

    assert!(board.pending().is_none());
    assert!(store.experiment_updates().is_empty());
    assert!(store.variant_updates().is_empty());
    assert_eq!(store.stored_status("exp-1"), ExperimentStatus::Running);
}

#[tokio::test]
async fn pending_request_blocks_new_drags() {
    let store = MockStore::with_experiments(vec![
        experiment("exp-1", "E1", ExperimentStatus::Backlog),
        experiment("exp-2", "E2", ExperimentStatus::Backlog),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Planned))
        .await
        .unwrap();

    assert!(matches!(
        board.on_pickup("exp-2"),
        Err(BoardError::RequestPending)
    ));
    assert!(matches!(
        board.on_drop("exp-2", Some(ExperimentStatus::Running)).await,
        Err(BoardError::RequestPending)
    ));
}

#[tokio::test]
async fn columns_partition_in_fixed_order() {
    let store = MockStore::with_experiments(vec![
        experiment("exp-1", "E1", ExperimentStatus::Backlog),
        experiment("exp-2", "E2", ExperimentStatus::Running),
        experiment("exp-3", "E3", ExperimentStatus::Completed),
        experiment("exp-4", "E4", ExperimentStatus::Running),
    ]);
    let board = board(&store).await;

    let columns = board.columns();
    let statuses: Vec<_> = columns.iter().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        vec![
            ExperimentStatus::Backlog,
            ExperimentStatus::Planned,
            ExperimentStatus::Running,
            ExperimentStatus::Completed,
        ]
    );
    assert_eq!(columns[0].experiments.len(), 1);
    assert_eq!(columns[1].experiments.len(), 0);
    assert_eq!(columns[2].experiments.len(), 2);
    assert_eq!(columns[3].experiments.len(), 1);
}

#[tokio::test]
async fn delete_removes_card_and_refetches() {
    let store = MockStore::with_experiments(vec![
        experiment("exp-1", "E1", ExperimentStatus::Backlog),
        experiment("exp-2", "E2", ExperimentStatus::Running),
    ]);
    let mut board = board(&store).await;

    board.delete("exp-1").await.unwrap();

    assert_eq!(store.deleted.borrow().as_slice(), ["exp-1"]);
    assert_eq!(board.experiments().len(), 1);
    assert_eq!(board.experiments()[0].id, "exp-2");
}

#[tokio::test]
async fn delete_is_blocked_while_a_request_is_pending() {
    let store = MockStore::with_experiments(vec![
        experiment("exp-1", "E1", ExperimentStatus::Backlog),
        experiment("exp-2", "E2", ExperimentStatus::Backlog),
    ]);
    let mut board = board(&store).await;
    board
        .on_drop("exp-1", Some(ExperimentStatus::Planned))
        .await
        .unwrap();

    assert!(matches!(
        board.delete("exp-2").await,
        Err(BoardError::RequestPending)
    ));
    assert!(store.deleted.borrow().is_empty());
}

#[test]
fn notifications_render_human_readable_strings() {
    let committed = Notification::TransitionCommitted {
        experiment_name: "Sticky CTA".into(),
        status: ExperimentStatus::Completed,
    };
    assert_eq!(committed.to_string(), "Sticky CTA moved to completed");

    let partial = Notification::VariantUrlSaveFailed {
        experiment_name: "Sticky CTA".into(),
        variant_ids: vec!["var-b".into()],
    };
    assert!(partial.to_string().contains("failed to save"));
}
