//! Tests for the create/edit form state.

mod common;

use assert_matches::assert_matches;
use common::{loaded_dashboard, record, rex_draft};
use petcare_client::error::ClientError;
use petcare_client::form::{FormMode, PetForm};
use petcare_core::pet::{HealthStatus, Species};
use petcare_core::validation::{FieldErrors, PetField};

#[tokio::test]
async fn invalid_draft_is_not_submitted() {
    let mut dashboard = loaded_dashboard(Vec::new()).await;
    let calls_before = dashboard.api().calls();

    let mut form = PetForm::create();
    *form.draft_mut() = rex_draft();
    form.draft_mut().age = 0.0;

    let err = form.submit(&mut dashboard).await.unwrap_err();

    assert_matches!(&err, ClientError::Invalid(fields) if fields.contains(PetField::Age));
    assert_eq!(form.field_error(PetField::Age), Some("Age must be greater than 0"));
    assert!(form.is_open());
    assert_eq!(dashboard.api().calls(), calls_before);
    assert!(dashboard.pets().is_empty());
}

#[tokio::test]
async fn each_missing_required_field_is_reported() {
    let mut dashboard = loaded_dashboard(Vec::new()).await;
    let mut form = PetForm::create();

    assert!(form.submit(&mut dashboard).await.is_err());

    for field in [
        PetField::Name,
        PetField::Type,
        PetField::Breed,
        PetField::Age,
        PetField::Weight,
        PetField::ActivityLevel,
    ] {
        assert!(
            form.field_error(field).is_some_and(|m| !m.is_empty()),
            "{} should have a message",
            field.as_str()
        );
    }
}

#[tokio::test]
async fn valid_create_closes_form_and_adds_record() {
    let mut dashboard = loaded_dashboard(Vec::new()).await;
    let mut form = PetForm::create();
    assert_eq!(form.draft().health_issues, "None");
    *form.draft_mut() = rex_draft();

    let created = form.submit(&mut dashboard).await.unwrap();

    assert!(!form.is_open());
    assert!(form.field_errors().is_empty());
    assert!(form.submit_error().is_none());
    assert!(!form.submitting());
    assert_eq!(dashboard.pets(), &[created.clone()]);
    assert_eq!(created.health_status, HealthStatus::Healthy);
}

#[tokio::test]
async fn persistence_failure_keeps_form_open_with_message() {
    let mut dashboard = loaded_dashboard(Vec::new()).await;
    let mut server_fields = FieldErrors::new();
    server_fields.insert(PetField::Name, "Name is required");
    dashboard
        .api()
        .fail_with_fields(400, "Validation failed: name: Name is required", server_fields);

    let mut form = PetForm::create();
    *form.draft_mut() = rex_draft();

    assert!(form.submit(&mut dashboard).await.is_err());

    assert!(form.is_open());
    assert_eq!(
        form.submit_error(),
        Some("Validation failed: name: Name is required")
    );
    assert_eq!(form.field_error(PetField::Name), Some("Name is required"));
    assert!(dashboard.pets().is_empty());
}

#[tokio::test]
async fn retry_after_failure_succeeds() {
    let mut dashboard = loaded_dashboard(Vec::new()).await;
    dashboard.api().fail_with(500, "An internal error occurred");

    let mut form = PetForm::create();
    *form.draft_mut() = rex_draft();
    assert!(form.submit(&mut dashboard).await.is_err());

    dashboard.api().recover();
    form.submit(&mut dashboard).await.unwrap();

    assert!(!form.is_open());
    assert!(form.submit_error().is_none());
    assert_eq!(dashboard.pets().len(), 1);
}

#[tokio::test]
async fn edit_form_prefills_and_updates_in_place() {
    let rex = record("Rex", Species::Dog, "None");
    let tom = record("Tom", Species::Cat, "None");
    let mut dashboard = loaded_dashboard(vec![rex.clone(), tom.clone()]).await;

    let mut form = PetForm::edit(&rex);
    assert_eq!(form.mode(), FormMode::Edit(rex.id));
    assert_eq!(form.draft().name, "Rex");
    assert_eq!(form.draft().species, "dog");

    form.draft_mut().health_issues = "Limping".into();
    let updated = form.submit(&mut dashboard).await.unwrap();

    assert_eq!(updated.id, rex.id);
    assert_eq!(updated.health_status, HealthStatus::NeedsAttention);
    assert_eq!(dashboard.pets()[0], updated);
    assert_eq!(dashboard.pets()[1], tom);
}

#[test]
fn cancel_closes_and_clears_errors() {
    let mut form = PetForm::create();
    assert!(!form.validate());
    assert!(!form.field_errors().is_empty());

    form.cancel();

    assert!(!form.is_open());
    assert!(form.field_errors().is_empty());
}
