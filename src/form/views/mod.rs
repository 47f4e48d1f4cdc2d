//! # Views
//!
//! Output surfaces for the form. The terminal renderer is the only one.

pub mod ansi_escape_codes;
pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
