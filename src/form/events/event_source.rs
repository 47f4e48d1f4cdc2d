//! # Event Source Abstraction
//!
//! The app controller pulls `InputEvent`s from an `EventSource`, so the same
//! loop runs against a prompting terminal or a pre-programmed queue:
//!
//! ```text
//! Production:   AppController ──▶ TerminalEventSource ──▶ stdin lines
//! Flags/tests:  AppController ──▶ ScriptedEventSource ──▶ VecDeque<InputEvent>
//! ```

use super::view_events::InputEvent;
use anyhow::Result;

/// Trait for abstracting input event sources
pub trait EventSource {
    /// Read the next input event
    ///
    /// Returns `None` once the source has nothing more to offer.
    fn read(&mut self) -> Result<Option<InputEvent>>;

    /// Check if the event source is exhausted
    ///
    /// Interactive sources are never exhausted; scripted sources are once every
    /// queued event has been consumed.
    fn is_exhausted(&self) -> bool {
        false
    }
}
