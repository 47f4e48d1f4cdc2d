//! # Event Bus
//!
//! Fan-out of the events a `FormController` emits. `SimpleEventBus` calls
//! handlers inline; `ChannelEventBus` forwards into a tokio channel so an
//! observer can drain events on its own schedule.

use super::model_events::ModelEvent;
use super::view_events::ViewEvent;
use tokio::sync::mpsc;

pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;
pub type ViewEventHandler = Box<dyn Fn(&ViewEvent) + Send + Sync>;

/// Sink for form events
pub trait EventBus: Send + Sync {
    fn publish_model_event(&mut self, event: ModelEvent);

    fn publish_view_event(&mut self, event: ViewEvent);
}

/// Calls subscribed handlers in subscription order
#[derive(Default)]
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
    view_handlers: Vec<ViewEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }

    pub fn subscribe_to_view_events(&mut self, handler: ViewEventHandler) {
        self.view_handlers.push(handler);
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        self.model_handlers.iter().for_each(|handler| handler(&event));
    }

    fn publish_view_event(&mut self, event: ViewEvent) {
        self.view_handlers.iter().for_each(|handler| handler(&event));
    }
}

/// Either kind of event, as carried by `ChannelEventBus`
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Model(ModelEvent),
    View(ViewEvent),
}

/// Forwards every event into an unbounded channel
pub struct ChannelEventBus {
    sender: mpsc::UnboundedSender<FormEvent>,
}

impl ChannelEventBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FormEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn forward(&self, event: FormEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Form event dropped, receiver is gone");
        }
    }
}

impl EventBus for ChannelEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        self.forward(FormEvent::Model(event));
    }

    fn publish_view_event(&mut self, event: ViewEvent) {
        self.forward(FormEvent::View(event));
    }
}
