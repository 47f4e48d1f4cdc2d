//! # Model Events
//!
//! Events emitted when the form state changes.

use super::types::FieldId;

/// Events emitted when the form model changes
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// A field value was replaced
    FieldChanged {
        field: FieldId,
        old_value: String,
        new_value: String,
    },

    /// The form entered `Submitting`
    SubmissionStarted,

    /// The form returned to `Idle`
    SubmissionFinished { success: bool },

    /// All fields were cleared after a successful submission
    FormReset,
}
