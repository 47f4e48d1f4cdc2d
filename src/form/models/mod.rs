//! # Models
//!
//! Plain data and the form state machine. No I/O happens here.

pub mod form_state;
pub mod lead_submission;
pub mod notification;
pub mod submission_result;

pub use form_state::{FormState, SubmissionOutcome};
pub use lead_submission::LeadSubmission;
pub use notification::{Notification, NotificationVariant};
pub use submission_result::{SubmissionResult, DEFAULT_ACKNOWLEDGEMENT};
