//! # Services Layer
//!
//! Services abstract external resources away from the form controller. The only
//! one here is the webhook that receives booked demos.

pub mod submission;

// Re-export service types
pub use crate::form::models::SubmissionOutcome;
pub use submission::{SubmissionClient, SubmissionService, UNEXPECTED_ERROR};
