//! # Application Controller
//!
//! Event loop tying an input source, the form controller, and a renderer together.
//! It also plays the part of the browser's `required` constraint: a submit with
//! empty required fields is refused here and never reaches the form controller.

use super::form_controller::FormController;
use crate::form::events::{EventSource, InputEvent};
use crate::form::models::Notification;
use crate::form::services::SubmissionService;
use crate::form::views::ViewRenderer;
use anyhow::Result;

pub struct AppController<S: SubmissionService, ES: EventSource, V: ViewRenderer> {
    form: FormController<S>,
    event_source: ES,
    view: V,
    last_notification: Option<Notification>,
}

impl<S: SubmissionService, ES: EventSource, V: ViewRenderer> AppController<S, ES, V> {
    pub fn new(form: FormController<S>, event_source: ES, view: V) -> Self {
        Self {
            form,
            event_source,
            view,
            last_notification: None,
        }
    }

    pub fn form(&self) -> &FormController<S> {
        &self.form
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Run until the source quits, runs dry, or a submission succeeds
    ///
    /// Returns the notification of the last submission, if any was made.
    pub async fn run(&mut self) -> Result<Option<Notification>> {
        while let Some(event) = self.event_source.read()? {
            tracing::debug!("Received input event: {:?}", event);
            match event {
                InputEvent::FieldEntered { field, value } => {
                    if let Err(e) = self.form.update_field(field, value) {
                        tracing::warn!("Ignoring input: {}", e);
                    }
                }
                InputEvent::SubmitPressed => {
                    if self.handle_submit().await? {
                        break;
                    }
                }
                InputEvent::Quit => break,
            }
            self.render_pending()?;
        }

        Ok(self.last_notification.clone())
    }

    /// Returns true when the submission succeeded
    async fn handle_submit(&mut self) -> Result<bool> {
        let missing = self.form.lead().missing_required();
        if !missing.is_empty() {
            tracing::debug!("Submit refused, missing fields: {:?}", missing);
            self.view.render_missing_fields(&missing)?;
            return Ok(false);
        }

        if let Err(e) = self.form.start_submit() {
            tracing::warn!("Submit refused: {}", e);
            return Ok(false);
        }
        self.render_pending()?;

        let notification = self.form.wait_for_submission().await?;
        self.render_pending()?;

        let succeeded = !notification.is_failure();
        self.last_notification = Some(notification);
        Ok(succeeded)
    }

    fn render_pending(&mut self) -> Result<()> {
        let events = self.form.collect_pending_view_events();
        if events.is_empty() {
            return Ok(());
        }
        self.view.render(&events, self.form.state())
    }
}
