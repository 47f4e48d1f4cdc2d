//! # Form Errors
//!
//! Rejections produced by the form state machine.

use super::events::FieldId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Identifier does not name any lead field
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    /// Inputs are disabled while a submission is in flight
    #[error("cannot edit {0} while a submission is in flight")]
    InputsDisabled(FieldId),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("no submission is in flight")]
    NotSubmitting,
}
