//! # Submission Service
//!
//! Delivers a lead to the automation webhook and normalizes whatever happens into
//! a `SubmissionResult`.

use crate::form::models::{LeadSubmission, SubmissionResult, DEFAULT_ACKNOWLEDGEMENT};
use anyhow::{anyhow, Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::future::Future;

/// Error text used when a failure carries no message of its own
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Seam between the form controller and whatever delivers leads
///
/// An `Err` is the unexpected path: the service blew up instead of producing a
/// result. `SubmissionClient` never returns one.
pub trait SubmissionService: Send + Sync + 'static {
    fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> impl Future<Output = Result<SubmissionResult>> + Send;
}

/// HTTP client for the demo-booking webhook
///
/// One POST per call. No retry, no timeout.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        tracing::debug!("Creating SubmissionClient for {}", endpoint);
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Deliver the lead; never fails, every error becomes `success: false`
    pub async fn request_demo(&self, lead: &LeadSubmission) -> SubmissionResult {
        match self.deliver(lead).await {
            Ok(acknowledgement) => {
                tracing::info!("Demo booking delivered to {}", self.endpoint);
                SubmissionResult::delivered(acknowledgement)
            }
            Err(e) => {
                tracing::error!("Error sending demo booking request: {e:#}");
                SubmissionResult::failed(error_text(&e))
            }
        }
    }

    async fn deliver(&self, lead: &LeadSubmission) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error! status: {}", status.as_u16()));
        }

        let body: Value = response.json().await?;
        acknowledgement_from(&body)
    }
}

impl SubmissionService for SubmissionClient {
    async fn submit(&self, lead: &LeadSubmission) -> Result<SubmissionResult> {
        Ok(self.request_demo(lead).await)
    }
}

/// Pull the acknowledgement out of a 2xx JSON body
fn acknowledgement_from(body: &Value) -> Result<String> {
    match body {
        Value::Null => Err(anyhow!("response body is null")),
        Value::Object(fields) => Ok(fields
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_ACKNOWLEDGEMENT)
            .to_string()),
        _ => Ok(DEFAULT_ACKNOWLEDGEMENT.to_string()),
    }
}

fn error_text(error: &anyhow::Error) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        UNEXPECTED_ERROR.to_string()
    } else {
        text
    }
}
