use pretty_assertions::assert_eq;

use uplift_core::enums::{ExperimentCategory, ExperimentStatus, MemberRole, Outcome};

use crate::error::StoreError;
use crate::test_support::helpers::{test_project, test_service};
use crate::updates::experiment::ExperimentUpdateBuilder;
use crate::updates::variant::VariantUpdateBuilder;

#[tokio::test]
async fn project_crud() {
    let svc = test_service().await;
    let project = svc
        .create_project("Acme Store", Some("Acme Inc"), Some("https://shop.acme.example"))
        .await
        .unwrap();
    assert!(project.id.starts_with("prj-"));

    let fetched = svc.get_project(&project.id).await.unwrap();
    assert_eq!(fetched, project);

    let renamed = svc
        .update_project(&project.id, Some("Acme DTC"), None, Some(None))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Acme DTC");
    assert_eq!(renamed.base_url, None);
    assert_eq!(renamed.client.as_deref(), Some("Acme Inc"));

    svc.delete_project(&project.id).await.unwrap();
    assert!(matches!(
        svc.get_project(&project.id).await,
        Err(StoreError::NoResult)
    ));
}

#[tokio::test]
async fn members_scoped_to_project() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let other = svc.create_project("Other", None, None).await.unwrap().id;

    let m = svc
        .add_member(&project, "ana@example.com", Some("Ana"), MemberRole::Admin)
        .await
        .unwrap();
    svc.add_member(&other, "bo@example.com", None, MemberRole::Viewer)
        .await
        .unwrap();

    let members = svc.list_members(&project).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].email, "ana@example.com");
    assert_eq!(members[0].role, MemberRole::Admin);

    svc.remove_member(&m.id).await.unwrap();
    assert!(svc.list_members(&project).await.unwrap().is_empty());
}

#[tokio::test]
async fn experiments_created_in_backlog_with_sequential_numbers() {
    let svc = test_service().await;
    let project = test_project(&svc).await;

    let first = svc
        .create_experiment(&project, "Trust badges", ExperimentCategory::TrustValue, None, None)
        .await
        .unwrap();
    let second = svc
        .create_experiment(&project, "Sticky CTA", ExperimentCategory::DesignChanges, None, None)
        .await
        .unwrap();

    assert_eq!(first.status, ExperimentStatus::Backlog);
    assert_eq!(first.test_number, 1);
    assert_eq!(second.test_number, 2);
}

#[tokio::test]
async fn list_experiments_excludes_archived_unless_asked() {
    let svc = test_service().await;
    let project = test_project(&svc).await;

    let keep = svc
        .create_experiment(&project, "A", ExperimentCategory::Other, None, None)
        .await
        .unwrap();
    let archived = svc
        .create_experiment(&project, "B", ExperimentCategory::Other, None, None)
        .await
        .unwrap();
    svc.update_experiment(
        &archived.id,
        ExperimentUpdateBuilder::new()
            .status(ExperimentStatus::Archived)
            .build(),
    )
    .await
    .unwrap();

    let board = svc.list_experiments(&project, false).await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].id, keep.id);

    let all = svc.list_experiments(&project, true).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn experiment_partial_update_writes_only_named_fields() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let exp = svc
        .create_experiment(
            &project,
            "Checkout copy",
            ExperimentCategory::CopyChanges,
            Some("checkout_conversion"),
            None,
        )
        .await
        .unwrap();

    let end = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let updated = svc
        .update_experiment(
            &exp.id,
            ExperimentUpdateBuilder::new()
                .status(ExperimentStatus::Completed)
                .actual_end_date(Some(end))
                .outcome(Some(Outcome::Inconclusive))
                .winner_variant_id(None)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(updated.status, ExperimentStatus::Completed);
    assert_eq!(updated.actual_end_date, Some(end));
    assert_eq!(updated.outcome, Some(Outcome::Inconclusive));
    assert_eq!(updated.winner_variant_id, None);
    // Untouched fields survive.
    assert_eq!(updated.primary_kpi.as_deref(), Some("checkout_conversion"));
    assert_eq!(updated.name, "Checkout copy");
}

#[tokio::test]
async fn variants_list_control_first() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let exp = svc
        .create_experiment(&project, "E", ExperimentCategory::Other, None, None)
        .await
        .unwrap();

    let b = svc
        .create_variant(&exp.id, "B", false, 50, None)
        .await
        .unwrap();
    let control = svc
        .create_variant(&exp.id, "Control", true, 50, None)
        .await
        .unwrap();

    let variants = svc.list_variants(&exp.id).await.unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].id, control.id, "control should sort first");
    assert_eq!(variants[1].id, b.id);
}

#[tokio::test]
async fn control_variant_delete_rejected() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let exp = svc
        .create_experiment(&project, "E", ExperimentCategory::Other, None, None)
        .await
        .unwrap();
    let control = svc
        .create_variant(&exp.id, "Control", true, 100, None)
        .await
        .unwrap();
    let b = svc.create_variant(&exp.id, "B", false, 0, None).await.unwrap();

    assert!(matches!(
        svc.delete_variant(&control.id).await,
        Err(StoreError::ControlVariant(_))
    ));
    svc.delete_variant(&b.id).await.unwrap();
    assert_eq!(svc.list_variants(&exp.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn variant_url_update() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let exp = svc
        .create_experiment(&project, "E", ExperimentCategory::Other, None, None)
        .await
        .unwrap();
    let b = svc.create_variant(&exp.id, "B", false, 50, None).await.unwrap();

    let updated = svc
        .update_variant(
            &b.id,
            VariantUpdateBuilder::new()
                .target_url(Some("https://shop.acme.example/p/123?v=b".into()))
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(
        updated.target_url.as_deref(),
        Some("https://shop.acme.example/p/123?v=b")
    );
}

#[tokio::test]
async fn delete_experiment_cascades() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let exp = svc
        .create_experiment(&project, "E", ExperimentCategory::Other, None, None)
        .await
        .unwrap();
    svc.create_variant(&exp.id, "Control", true, 100, None)
        .await
        .unwrap();
    svc.add_note(&exp.id, Some("ana"), "kickoff").await.unwrap();

    svc.delete_experiment(&exp.id).await.unwrap();
    assert!(svc.list_variants(&exp.id).await.unwrap().is_empty());
    assert!(svc.list_notes(&exp.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn notes_newest_first() {
    let svc = test_service().await;
    let project = test_project(&svc).await;
    let exp = svc
        .create_experiment(&project, "E", ExperimentCategory::Other, None, None)
        .await
        .unwrap();

    svc.add_note(&exp.id, None, "first").await.unwrap();
    svc.add_note(&exp.id, None, "second").await.unwrap();

    let notes = svc.list_notes(&exp.id).await.unwrap();
    assert_eq!(notes.len(), 2);
    // Same-timestamp rows fall back to id ordering; both notes exist.
    assert!(notes.iter().any(|n| n.body == "first"));
    assert!(notes.iter().any(|n| n.body == "second"));
}
