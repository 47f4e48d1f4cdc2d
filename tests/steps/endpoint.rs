//! Step definitions for the booking webhook and the submission client

use crate::common::world::LeadFormWorld;
use cucumber::{given, then, when};
use orthochat::FieldId;
use tracing::info;
use wiremock::ResponseTemplate;

// === WEBHOOK STUBS ===

#[given(expr = "the booking endpoint responds with status {int} and body {string}")]
async fn given_endpoint_with_body(world: &mut LeadFormWorld, status: u16, body: String) {
    info!("Stubbing booking endpoint: {} {}", status, body);
    world
        .stub_endpoint(ResponseTemplate::new(status).set_body_string(body))
        .await;
}

#[given(expr = "the booking endpoint responds with status {int}")]
async fn given_endpoint_with_status(world: &mut LeadFormWorld, status: u16) {
    info!("Stubbing booking endpoint: {}", status);
    world.stub_endpoint(ResponseTemplate::new(status)).await;
}

#[given("the booking endpoint is unreachable")]
async fn given_endpoint_unreachable(world: &mut LeadFormWorld) {
    world.unreachable_endpoint();
}

#[given(expr = "a lead from {string} {string} at {string} for {string}")]
async fn given_lead(
    world: &mut LeadFormWorld,
    first_name: String,
    last_name: String,
    email: String,
    practice_name: String,
) {
    world.lead.set(FieldId::FirstName, first_name);
    world.lead.set(FieldId::LastName, last_name);
    world.lead.set(FieldId::Email, email);
    world.lead.set(FieldId::PracticeName, practice_name);
}

// === DIRECT CLIENT CALLS ===

#[when("I request a demo directly")]
async fn when_request_demo(world: &mut LeadFormWorld) {
    let client = world.client();
    let result = client.request_demo(&world.lead).await;
    info!("Submission result: {:?}", result);
    world.last_result = Some(result);
}

#[then(expr = "the result should be a success with message {string}")]
async fn then_result_success(world: &mut LeadFormWorld, message: String) {
    let result = world.last_result.as_ref().expect("no submission result");
    assert!(result.success, "expected success, got {result:?}");
    assert_eq!(result.message.as_deref(), Some(message.as_str()));
    assert_eq!(result.error, None);
}

#[then(expr = "the result should be a failure mentioning {string}")]
async fn then_result_failure_mentioning(world: &mut LeadFormWorld, text: String) {
    let result = world.last_result.as_ref().expect("no submission result");
    assert!(!result.success, "expected failure, got {result:?}");
    let error = result.error.as_deref().unwrap_or_default();
    assert!(error.contains(&text), "error '{error}' lacks '{text}'");
}

#[then("the result should be a failure with an error message")]
async fn then_result_failure_with_error(world: &mut LeadFormWorld) {
    let result = world.last_result.as_ref().expect("no submission result");
    assert!(!result.success, "expected failure, got {result:?}");
    assert!(
        result.error.as_deref().is_some_and(|e| !e.is_empty()),
        "expected a non-empty error, got {result:?}"
    );
}

// === WHAT THE WEBHOOK SAW ===

#[then(expr = "the endpoint should have received {int} request(s)")]
async fn then_endpoint_received(world: &mut LeadFormWorld, count: usize) {
    assert_eq!(world.received_bodies().await.len(), count);
}

#[then(expr = "the last request should carry {word} {string}")]
async fn then_last_request_carries(world: &mut LeadFormWorld, key: String, value: String) {
    let bodies = world.received_bodies().await;
    let body = bodies.last().expect("endpoint received no requests");
    assert_eq!(body[key.as_str()], serde_json::Value::String(value), "body: {body}");
}
