//! # Lead Form World
//!
//! Cucumber world holding a real `FormController` wired to a `SubmissionClient`
//! that talks to a wiremock stand-in for the booking webhook.

use cucumber::World;
use orthochat::form::events::{ChannelEventBus, FormEvent};
use orthochat::{
    FormController, FormError, LeadSubmission, Notification, SubmissionClient, SubmissionResult,
};
use std::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WEBHOOK_PATH: &str = "/webhook/book-demo";

/// Used when a scenario never touches the network
const UNUSED_ENDPOINT: &str = "http://127.0.0.1:9/webhook/book-demo";

#[derive(World)]
#[world(init = Self::new)]
pub struct LeadFormWorld {
    /// Stub webhook, kept alive for the scenario
    pub mock_server: Option<MockServer>,

    /// Endpoint the submission client posts to
    pub endpoint: Option<String>,

    /// Built on first use so endpoint steps can run first
    controller: Option<FormController<SubmissionClient>>,

    /// Everything the controller has published
    events: Option<UnboundedReceiver<FormEvent>>,

    /// Lead used by steps that call the client directly
    pub lead: LeadSubmission,

    pub last_result: Option<SubmissionResult>,
    pub last_notification: Option<Notification>,
    pub last_error: Option<FormError>,
}

impl std::fmt::Debug for LeadFormWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadFormWorld")
            .field("endpoint", &self.endpoint)
            .field("lead", &self.lead)
            .field("last_result", &self.last_result)
            .field("last_notification", &self.last_notification)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl LeadFormWorld {
    pub fn new() -> Self {
        Self {
            mock_server: None,
            endpoint: None,
            controller: None,
            events: None,
            lead: LeadSubmission::new(),
            last_result: None,
            last_notification: None,
            last_error: None,
        }
    }

    /// Start a stub webhook answering every JSON POST with `template`
    pub async fn stub_endpoint(&mut self, template: ResponseTemplate) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .and(header("content-type", "application/json"))
            .respond_with(template)
            .mount(&server)
            .await;

        self.endpoint = Some(format!("{}{}", server.uri(), WEBHOOK_PATH));
        self.mock_server = Some(server);
    }

    /// Point at a local port nobody listens on
    pub fn unreachable_endpoint(&mut self) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
        let port = listener
            .local_addr()
            .expect("probe port has an address")
            .port();
        drop(listener);
        self.endpoint = Some(format!("http://127.0.0.1:{port}{WEBHOOK_PATH}"));
    }

    pub fn client(&self) -> SubmissionClient {
        let endpoint = self.endpoint.as_deref().unwrap_or(UNUSED_ENDPOINT);
        SubmissionClient::new(endpoint).expect("Failed to build submission client")
    }

    pub fn form(&mut self) -> &mut FormController<SubmissionClient> {
        if self.controller.is_none() {
            let mut controller = FormController::new(self.client());
            let (bus, events) = ChannelEventBus::new();
            controller.set_event_bus(Box::new(bus));
            self.controller = Some(controller);
            self.events = Some(events);
        }
        self.controller
            .as_mut()
            .expect("controller was just initialized")
    }

    /// Drain the events published since the last call
    pub fn drain_events(&mut self) -> Vec<FormEvent> {
        let mut drained = Vec::new();
        if let Some(events) = self.events.as_mut() {
            while let Ok(event) = events.try_recv() {
                drained.push(event);
            }
        }
        drained
    }

    /// Bodies of every request the stub webhook received
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        let Some(server) = &self.mock_server else {
            return Vec::new();
        };
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                serde_json::from_slice(&request.body).expect("request body should be JSON")
            })
            .collect()
    }
}
