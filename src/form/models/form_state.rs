//! # Form State
//!
//! The lead being edited plus the submission status, mutated only through the
//! transitions below:
//!
//! ```text
//! Idle ──begin_submission──▶ Submitting ──complete_submission──▶ Idle
//! ```
//!
//! Field edits are only accepted while `Idle`.

use super::lead_submission::LeadSubmission;
use super::notification::Notification;
use super::submission_result::{SubmissionResult, DEFAULT_ACKNOWLEDGEMENT};
use crate::form::error::FormError;
use crate::form::events::{FieldId, SubmissionStatus};

/// What a dispatched submission reported back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The service produced a result (successful or not)
    Completed(SubmissionResult),
    /// The service failed without producing a result
    Aborted { reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    lead: LeadSubmission,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lead(&self) -> &LeadSubmission {
        &self.lead
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_in_flight()
    }

    /// Inputs and the submit control are disabled while in flight
    pub fn inputs_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Replace one field value
    ///
    /// Returns the previous value when the field actually changed, `None` when the
    /// new value equals the current one.
    pub fn update_field(
        &mut self,
        field: FieldId,
        value: String,
    ) -> Result<Option<String>, FormError> {
        if !self.inputs_enabled() {
            return Err(FormError::InputsDisabled(field));
        }
        if self.lead.get(field) == value {
            return Ok(None);
        }
        Ok(Some(self.lead.set(field, value)))
    }

    /// `Idle -> Submitting`, returning the snapshot to deliver
    pub fn begin_submission(&mut self) -> Result<LeadSubmission, FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInFlight);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.lead.clone())
    }

    /// `Submitting -> Idle`, producing the notification for the outcome
    ///
    /// Fields are cleared only when the result reports success.
    pub fn complete_submission(
        &mut self,
        outcome: SubmissionOutcome,
    ) -> Result<Notification, FormError> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }
        self.status = SubmissionStatus::Idle;

        let notification = match outcome {
            SubmissionOutcome::Completed(result) if result.success => {
                self.lead.reset();
                let acknowledgement = result
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_ACKNOWLEDGEMENT.to_string());
                Notification::booked(acknowledgement)
            }
            SubmissionOutcome::Completed(result) => {
                Notification::booking_failed(result.error.as_deref())
            }
            SubmissionOutcome::Aborted { .. } => Notification::unexpected_error(),
        };
        Ok(notification)
    }
}
