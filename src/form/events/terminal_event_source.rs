//! Terminal Event Source Implementation
//!
//! Production implementation of EventSource that prompts for each field on the
//! terminal and reads the answers line by line.

use super::event_source::EventSource;
use super::types::FieldId;
use super::view_events::InputEvent;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

const REQUIRED_FIELD_HINT: &str = "Please fill out this field.";

/// Event source that prompts field by field, then offers a retry after each submission
pub struct TerminalEventSource<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending_fields: VecDeque<FieldId>,
    submitted: bool,
    finished: bool,
}

impl TerminalEventSource<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalEventSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending_fields: FieldId::ALL.into_iter().collect(),
            submitted: false,
            finished: false,
        }
    }

    /// Consume the source and hand back the writer (used by tests to inspect prompts)
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a prompt and read one line; `None` on end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{text}").context("failed to write prompt")?;
        self.writer.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn finish(&mut self) -> Result<Option<InputEvent>> {
        self.finished = true;
        Ok(Some(InputEvent::Quit))
    }
}

impl<R: BufRead, W: Write> EventSource for TerminalEventSource<R, W> {
    fn read(&mut self) -> Result<Option<InputEvent>> {
        if self.finished {
            return Ok(None);
        }

        while let Some(field) = self.pending_fields.front().copied() {
            let Some(value) = self.prompt(&format!("{}: ", field.label()))? else {
                return self.finish();
            };
            if value.is_empty() && field.is_required() {
                writeln!(self.writer, "{REQUIRED_FIELD_HINT}")?;
                continue;
            }
            self.pending_fields.pop_front();
            return Ok(Some(InputEvent::FieldEntered { field, value }));
        }

        if !self.submitted {
            self.submitted = true;
            return Ok(Some(InputEvent::SubmitPressed));
        }

        match self.prompt("Try again? [y/N]: ")? {
            Some(answer) if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") => {
                Ok(Some(InputEvent::SubmitPressed))
            }
            _ => self.finish(),
        }
    }
}
