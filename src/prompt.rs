//! Line-oriented hit/stand prompt for terminals.

use std::io::{BufRead, Write};

use crate::event::{Action, PlayerInput};

/// Text written before every read.
pub const PROMPT: &str = "(h) to hit, or (s) to stand: ";

/// Reads hit/stand decisions from a reader, prompting on a writer.
///
/// Blank lines are skipped without prompting again. Any other line that
/// [`Action::parse`] rejects prompts again. End of input, or a read error,
/// counts as a stand.
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading from `reader` and writing to `writer`.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompt, returning the reader and writer.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    tracing::warn!("input closed, standing");
                    return None;
                }
                Ok(_) if line.trim().is_empty() => {}
                Ok(_) => return Some(line),
                Err(err) => {
                    tracing::warn!(%err, "failed to read input, standing");
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> PlayerInput for Prompt<R, W> {
    fn decide(&mut self, _score: u16) -> Action {
        loop {
            let _ = self.writer.write_all(PROMPT.as_bytes());
            let _ = self.writer.flush();

            let Some(line) = self.next_line() else {
                return Action::Stand;
            };
            if let Some(action) = Action::parse(&line) {
                return action;
            }
            tracing::debug!(input = line.trim(), "unrecognised action");
        }
    }
}
