//! # Notification Model
//!
//! Transient message shown to the user once a submission settles.

pub const BOOKED_TITLE: &str = "Demo Booked Successfully! 🎉";
pub const BOOKING_FAILED_TITLE: &str = "Booking Failed";
pub const BOOKING_FAILED_FALLBACK: &str = "Please try again later.";
pub const UNEXPECTED_ERROR_TITLE: &str = "Error";
pub const UNEXPECTED_ERROR_DESCRIPTION: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failure styling
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    /// Success notification carrying the acknowledgement from the endpoint
    pub fn booked(acknowledgement: impl Into<String>) -> Self {
        Self::new(BOOKED_TITLE, acknowledgement, NotificationVariant::Default)
    }

    /// Structured failure; an absent or empty error falls back to a generic hint
    pub fn booking_failed(error: Option<&str>) -> Self {
        let description = error
            .filter(|e| !e.is_empty())
            .unwrap_or(BOOKING_FAILED_FALLBACK);
        Self::new(
            BOOKING_FAILED_TITLE,
            description,
            NotificationVariant::Destructive,
        )
    }

    /// The submission blew up before producing a result
    pub fn unexpected_error() -> Self {
        Self::new(
            UNEXPECTED_ERROR_TITLE,
            UNEXPECTED_ERROR_DESCRIPTION,
            NotificationVariant::Destructive,
        )
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
