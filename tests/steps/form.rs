//! Step definitions for the lead form controller

use crate::common::world::LeadFormWorld;
use cucumber::gherkin::Step;
use cucumber::{then, when};
use orthochat::form::events::{FormEvent, ModelEvent};
use orthochat::{FieldId, FormError};
use tracing::{debug, info};

// === FIELD EDITS ===

#[when("I fill in the form with:")]
async fn when_fill_form(world: &mut LeadFormWorld, step: &Step) {
    let table = step.table.as_ref().expect("step needs a field table");
    for row in &table.rows {
        let (id, value) = (&row[0], row.get(1).cloned().unwrap_or_default());
        debug!("Filling {} with '{}'", id, value);
        world
            .form()
            .update_field_by_id(id, value)
            .expect("field edit should be accepted");
    }
}

#[when(expr = "I fill in {word} with {string}")]
async fn when_fill_field(world: &mut LeadFormWorld, id: String, value: String) {
    world.last_error = world.form().update_field_by_id(&id, value).err();
}

#[then("the edit should be rejected")]
async fn then_edit_rejected(world: &mut LeadFormWorld) {
    assert!(
        matches!(
            world.last_error,
            Some(FormError::UnknownField(_) | FormError::InputsDisabled(_))
        ),
        "expected a rejected edit, got {:?}",
        world.last_error
    );
}

#[then(expr = "field {word} should be {string}")]
async fn then_field_value(world: &mut LeadFormWorld, id: String, value: String) {
    let field: FieldId = id.parse().expect("unknown field id in feature file");
    assert_eq!(world.form().lead().get(field), value);
}

#[then("every field should be empty")]
async fn then_form_empty(world: &mut LeadFormWorld) {
    let lead = world.form().lead().clone();
    assert!(lead.is_empty(), "form still holds {lead:?}");
}

// === SUBMIT LIFECYCLE ===

#[when("I submit the form")]
async fn when_submit(world: &mut LeadFormWorld) {
    let notification = world
        .form()
        .submit()
        .await
        .expect("submission should start");
    info!("Notification: {:?}", notification);
    world.last_notification = Some(notification);
}

#[when("I start submitting the form")]
async fn when_start_submit(world: &mut LeadFormWorld) {
    world
        .form()
        .start_submit()
        .expect("submission should start");
}

#[when("I press submit again")]
async fn when_submit_again(world: &mut LeadFormWorld) {
    world.last_error = world.form().start_submit().err();
}

#[when("I wait for the submission to settle")]
async fn when_wait(world: &mut LeadFormWorld) {
    let notification = world
        .form()
        .wait_for_submission()
        .await
        .expect("a submission should be in flight");
    world.last_notification = Some(notification);
}

#[then("the form should be submitting")]
async fn then_submitting(world: &mut LeadFormWorld) {
    assert!(world.form().is_submitting());
    assert!(!world.form().inputs_enabled());
}

#[then("the form should not be submitting")]
async fn then_not_submitting(world: &mut LeadFormWorld) {
    assert!(!world.form().is_submitting());
    assert!(world.form().inputs_enabled());
}

#[then("the submission should be rejected as already in flight")]
async fn then_rejected_in_flight(world: &mut LeadFormWorld) {
    assert_eq!(world.last_error, Some(FormError::SubmissionInFlight));
}

// === NOTIFICATIONS ===

#[then(expr = "the notification title should be {string}")]
async fn then_notification_title(world: &mut LeadFormWorld, title: String) {
    let notification = world.last_notification.as_ref().expect("no notification");
    assert_eq!(notification.title, title);
}

#[then(expr = "the notification description should be {string}")]
async fn then_notification_description(world: &mut LeadFormWorld, description: String) {
    let notification = world.last_notification.as_ref().expect("no notification");
    assert_eq!(notification.description, description);
}

#[then(expr = "the notification description should contain {string}")]
async fn then_notification_description_contains(world: &mut LeadFormWorld, text: String) {
    let notification = world.last_notification.as_ref().expect("no notification");
    assert!(
        notification.description.contains(&text),
        "'{}' lacks '{}'",
        notification.description,
        text
    );
}

#[then("the notification should report a failure")]
async fn then_notification_failure(world: &mut LeadFormWorld) {
    let notification = world.last_notification.as_ref().expect("no notification");
    assert!(notification.is_failure(), "got {notification:?}");
}

// === PUBLISHED EVENTS ===

#[then(expr = "the form should have announced a {word} finish")]
async fn then_announced_finish(world: &mut LeadFormWorld, outcome: String) {
    let success = match outcome.as_str() {
        "successful" => true,
        "failed" => false,
        other => panic!("unknown outcome '{other}'"),
    };
    let models: Vec<ModelEvent> = world
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            FormEvent::Model(model) => Some(model),
            FormEvent::View(_) => None,
        })
        .collect();

    let finished = models
        .iter()
        .position(|event| *event == ModelEvent::SubmissionFinished { success })
        .unwrap_or_else(|| panic!("no finish event in {models:?}"));
    let reset = models.iter().skip(finished).any(|e| *e == ModelEvent::FormReset);
    assert_eq!(reset, success, "events: {models:?}");
}
