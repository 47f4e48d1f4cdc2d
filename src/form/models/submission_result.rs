//! # Submission Result Model
//!
//! Normalized outcome of one delivery attempt.

use serde::{Deserialize, Serialize};

/// Acknowledgement used when the endpoint does not supply one
pub const DEFAULT_ACKNOWLEDGEMENT: &str = "Demo booking request sent successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    /// The lead reached the endpoint
    pub fn delivered(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    /// The lead did not reach the endpoint
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
