//! # View Events
//!
//! Events related to view updates and user input.

use super::types::FieldId;
use crate::form::models::Notification;

/// Events emitted when the front-end needs to update
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Whole form needs redrawing (after a reset)
    FormRedrawRequired,

    /// A single input needs redrawing
    FieldRedrawRequired { field: FieldId },

    /// Inputs and the submit control were disabled or re-enabled
    InputsLockChanged { locked: bool },

    /// A notification must be shown to the user
    NotificationRaised(Notification),
}

/// Input events from the user
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A field received a new value
    FieldEntered { field: FieldId, value: String },

    /// The submit control was activated
    SubmitPressed,

    /// The user left the form
    Quit,
}

impl InputEvent {
    pub fn field(field: FieldId, value: impl Into<String>) -> Self {
        InputEvent::FieldEntered {
            field,
            value: value.into(),
        }
    }
}
