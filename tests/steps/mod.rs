//! Step definitions for the cucumber suite
//!
//! - `endpoint` - stub webhook setup and direct client calls
//! - `form` - field edits, submit lifecycle and notifications

pub mod endpoint;
pub mod form;
