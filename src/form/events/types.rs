//! # Core Event Types
//!
//! Field identifiers and the submission status shared by models, events, and views.

use crate::form::error::FormError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a lead form field
///
/// Each variant maps to exactly one `LeadSubmission` field. The string form is the
/// camelCase key used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    PracticeName,
    Message,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::PracticeName,
        FieldId::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::PracticeName => "practiceName",
            FieldId::Message => "message",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::PracticeName => "Practice name",
            FieldId::Message => "Message (optional)",
        }
    }

    /// Whether the field must be non-empty before a submission is attempted
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::Message)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Submission lifecycle state; `Submitting` is the in-flight flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}
