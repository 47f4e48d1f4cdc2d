//! Scripted Event Source Implementation
//!
//! EventSource backed by a queue of pre-programmed events. Used for
//! flag-driven runs and for deterministic tests.

use super::event_source::EventSource;
use super::types::FieldId;
use super::view_events::InputEvent;
use anyhow::Result;
use std::collections::VecDeque;

/// Event source that provides events from a pre-programmed queue
#[derive(Debug, Clone, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<InputEvent>,
}

impl ScriptedEventSource {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Create a scripted source with pre-populated events
    pub fn with_events(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Script that fills the given fields and then presses submit
    pub fn fill_and_submit<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (FieldId, S)>,
        S: Into<String>,
    {
        let mut events: Vec<InputEvent> = fields
            .into_iter()
            .map(|(field, value)| InputEvent::field(field, value))
            .collect();
        events.push(InputEvent::SubmitPressed);
        Self::with_events(events)
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn read(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}
