//! # Form Controller
//!
//! Owns the form state and drives the submit lifecycle. Every state change goes
//! through a `FormState` transition, then is announced as model events on the
//! event bus and as view events queued for the front-end.
//!
//! Submission runs on a spawned task and reports back through a oneshot channel,
//! so the in-flight flag stays observable while the request is pending.

use crate::form::error::FormError;
use crate::form::events::{EventBus, FieldId, ModelEvent, ViewEvent};
use crate::form::models::{FormState, LeadSubmission, Notification};
use crate::form::services::{SubmissionOutcome, SubmissionService};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

const TASK_VANISHED: &str = "submission task ended without reporting";

pub struct FormController<S: SubmissionService> {
    state: FormState,
    service: Arc<S>,
    event_bus: Option<Box<dyn EventBus>>,
    pending_view_events: Vec<ViewEvent>,
    in_flight: Option<oneshot::Receiver<SubmissionOutcome>>,
}

impl<S: SubmissionService> FormController<S> {
    pub fn new(service: S) -> Self {
        Self::with_shared_service(Arc::new(service))
    }

    pub fn with_shared_service(service: Arc<S>) -> Self {
        Self {
            state: FormState::new(),
            service,
            event_bus: None,
            pending_view_events: Vec::new(),
            in_flight: None,
        }
    }

    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn lead(&self) -> &LeadSubmission {
        self.state.lead()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn inputs_enabled(&self) -> bool {
        self.state.inputs_enabled()
    }

    /// Replace one field value; rejected while a submission is in flight
    pub fn update_field(
        &mut self,
        field: FieldId,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let new_value = value.into();
        let Some(old_value) = self.state.update_field(field, new_value.clone())? else {
            return Ok(());
        };

        tracing::debug!("Field {} updated", field);
        self.emit_model_event(ModelEvent::FieldChanged {
            field,
            old_value,
            new_value,
        });
        self.emit_view_event([ViewEvent::FieldRedrawRequired { field }]);
        Ok(())
    }

    /// Update a field named by its wire identifier (e.g. `practiceName`)
    pub fn update_field_by_id(
        &mut self,
        id: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field: FieldId = id.parse()?;
        self.update_field(field, value)
    }

    /// `Idle -> Submitting` and dispatch the current lead
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_submit(&mut self) -> Result<(), FormError> {
        let snapshot = self.state.begin_submission()?;
        tracing::info!("Submitting demo booking for {}", snapshot.email);

        let (sender, receiver) = oneshot::channel();
        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            let outcome = match service.submit(&snapshot).await {
                Ok(result) => SubmissionOutcome::Completed(result),
                Err(e) => {
                    tracing::error!("Submission failed unexpectedly: {e:#}");
                    SubmissionOutcome::Aborted {
                        reason: e.to_string(),
                    }
                }
            };
            // Ignore send errors (controller might have been dropped)
            let _ = sender.send(outcome);
        });
        self.in_flight = Some(receiver);

        self.emit_model_event(ModelEvent::SubmissionStarted);
        self.emit_view_event([ViewEvent::InputsLockChanged { locked: true }]);
        Ok(())
    }

    /// Non-blocking completion check
    ///
    /// Returns the notification once the in-flight submission has settled.
    pub fn poll_submission(&mut self) -> Option<Notification> {
        let receiver = self.in_flight.as_mut()?;
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => SubmissionOutcome::Aborted {
                reason: TASK_VANISHED.to_string(),
            },
        };
        self.in_flight = None;
        self.finish_submission(outcome).ok()
    }

    /// Wait for the in-flight submission to settle
    pub async fn wait_for_submission(&mut self) -> Result<Notification, FormError> {
        let receiver = self.in_flight.as_mut().ok_or(FormError::NotSubmitting)?;
        let outcome = receiver.await.unwrap_or_else(|_| SubmissionOutcome::Aborted {
            reason: TASK_VANISHED.to_string(),
        });
        self.in_flight = None;
        self.finish_submission(outcome)
    }

    /// Submit the current lead and wait for the notification
    pub async fn submit(&mut self) -> Result<Notification, FormError> {
        self.start_submit()?;
        self.wait_for_submission().await
    }

    /// Drain view events queued since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    fn finish_submission(&mut self, outcome: SubmissionOutcome) -> Result<Notification, FormError> {
        let success = matches!(&outcome, SubmissionOutcome::Completed(result) if result.success);
        if let SubmissionOutcome::Aborted { reason } = &outcome {
            tracing::warn!("Submission aborted: {}", reason);
        }

        let notification = self.state.complete_submission(outcome)?;
        tracing::info!(
            "Submission finished: success={}, notification='{}'",
            success,
            notification.title
        );

        self.emit_model_event(ModelEvent::SubmissionFinished { success });
        self.emit_view_event([ViewEvent::InputsLockChanged { locked: false }]);
        if success {
            self.emit_model_event(ModelEvent::FormReset);
            self.emit_view_event([ViewEvent::FormRedrawRequired]);
        }
        self.emit_view_event([ViewEvent::NotificationRaised(notification.clone())]);
        Ok(notification)
    }

    fn emit_model_event(&mut self, event: ModelEvent) {
        if let Some(event_bus) = self.event_bus.as_mut() {
            event_bus.publish_model_event(event);
        }
    }

    fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if let Some(event_bus) = self.event_bus.as_mut() {
                event_bus.publish_view_event(event.clone());
            }
            self.pending_view_events.push(event);
        }
    }
}
