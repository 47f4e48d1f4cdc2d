//! # OrthoChat - Demo Booking Lead Capture
//!
//! Collects a demo-booking request (a "lead") and delivers it to the OrthoChat
//! automation webhook, reporting the outcome back as a notification.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  ViewEvents  ┌────────────────┐  transitions  ┌───────────┐
//! │    View     │◄─────────────│ FormController │──────────────►│ FormState │
//! │             │              │                │               │           │
//! │ - Prompts   │              │ - Submit       │               │ - Lead    │
//! │ - Notices   │              │   lifecycle    │               │ - Status  │
//! └─────────────┘              └────────────────┘               └───────────┘
//!        ▲                             │ spawn
//!        │ InputEvents                 ▼
//! ┌──────────────┐            ┌──────────────────┐   POST JSON   ┌─────────┐
//! │AppController │            │ SubmissionClient │──────────────►│ Webhook │
//! └──────────────┘            └──────────────────┘               └─────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod form;

// Re-export main types for easy access
pub use form::*;
