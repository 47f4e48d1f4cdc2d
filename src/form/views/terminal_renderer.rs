//! # Terminal Renderer
//!
//! Line-oriented view: announces the submitting state and prints notifications.
//! Colors are only used when the output is a terminal.

use super::ansi_escape_codes::{BOLD, DIM, FG_GREEN, FG_RED, RESET};
use crate::form::events::{FieldId, ViewEvent};
use crate::form::models::{FormState, Notification};
use anyhow::{Context, Result};
use std::io::{Stdout, Write};

/// Trait for rendering form view events
pub trait ViewRenderer {
    /// Handle view events
    fn render(&mut self, events: &[ViewEvent], state: &FormState) -> Result<()>;

    /// Tell the user which required fields still need a value
    fn render_missing_fields(&mut self, fields: &[FieldId]) -> Result<()>;
}

pub struct TerminalRenderer<W: Write> {
    writer: W,
    color: bool,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), atty::is(atty::Stream::Stdout))
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn render_notification(&mut self, notification: &Notification) -> Result<()> {
        let (marker, style) = if notification.is_failure() {
            ("✖", FG_RED)
        } else {
            ("✔", FG_GREEN)
        };
        let headline = self.styled(style, &format!("{marker} {}", notification.title));
        let headline = self.styled(BOLD, &headline);
        writeln!(self.writer, "{headline}")?;
        writeln!(self.writer, "  {}", notification.description)?;
        Ok(())
    }
}

impl<W: Write> ViewRenderer for TerminalRenderer<W> {
    fn render(&mut self, events: &[ViewEvent], _state: &FormState) -> Result<()> {
        for event in events {
            tracing::trace!("Rendering view event: {:?}", event);
            match event {
                ViewEvent::InputsLockChanged { locked: true } => {
                    let line = self.styled(DIM, "Submitting...");
                    writeln!(self.writer, "{line}")?;
                }
                ViewEvent::NotificationRaised(notification) => {
                    self.render_notification(notification)?;
                }
                ViewEvent::FormRedrawRequired => {
                    let line = self.styled(DIM, "Form cleared.");
                    writeln!(self.writer, "{line}")?;
                }
                // Line mode has nothing to redraw per field
                ViewEvent::FieldRedrawRequired { .. }
                | ViewEvent::InputsLockChanged { locked: false } => {}
            }
        }
        self.writer.flush().context("failed to flush terminal output")
    }

    fn render_missing_fields(&mut self, fields: &[FieldId]) -> Result<()> {
        let labels: Vec<&str> = fields.iter().map(FieldId::label).collect();
        let line = self.styled(FG_RED, &format!("Please fill out: {}", labels.join(", ")));
        writeln!(self.writer, "{line}")?;
        self.writer.flush().context("failed to flush terminal output")
    }
}
