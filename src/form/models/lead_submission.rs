//! # Lead Submission Model
//!
//! The data collected by the demo-booking form.

use crate::form::events::FieldId;
use serde::{Deserialize, Serialize};

/// Demo-booking request as sent to the automation webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub practice_name: String,
    #[serde(default)]
    pub message: String,
}

impl LeadSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::PracticeName => &self.practice_name,
            FieldId::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::PracticeName => &mut self.practice_name,
            FieldId::Message => &mut self.message,
        }
    }

    /// Replace one field, returning the previous value
    pub fn set(&mut self, field: FieldId, value: String) -> String {
        std::mem::replace(self.slot_mut(field), value)
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Required fields that are still empty, in form order
    pub fn missing_required(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }
}
