//! # Events Module
//!
//! Re-exports all event system components organized by category.

pub mod event_bus;
pub mod event_source;
pub mod model_events;
pub mod scripted_event_source;
pub mod terminal_event_source;
pub mod types;
pub mod view_events;

// Re-export all types for easy access
pub use event_bus::{
    ChannelEventBus, EventBus, FormEvent, ModelEventHandler, SimpleEventBus, ViewEventHandler,
};
pub use event_source::EventSource;
pub use model_events::ModelEvent;
pub use scripted_event_source::ScriptedEventSource;
pub use terminal_event_source::TerminalEventSource;
pub use types::{FieldId, SubmissionStatus};
pub use view_events::{InputEvent, ViewEvent};
