//! # Lead Form
//!
//! Form state, submission lifecycle, and the terminal front-end that drives them.

pub mod controllers;
pub mod error;
pub mod events;
pub mod models;
pub mod services;
pub mod views;

// Re-export core types
pub use controllers::{AppController, FormController};
pub use error::FormError;
pub use events::{FieldId, SubmissionStatus};
pub use models::{FormState, LeadSubmission, Notification, NotificationVariant, SubmissionResult};
pub use services::{SubmissionClient, SubmissionOutcome, SubmissionService};
