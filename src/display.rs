//! Player-visible message output.
//!
//! The engine announces every event (deals, plays, draws, wins,
//! reshuffles) through a `Display`. It only ever writes; what happens to
//! the text is up to the implementation.
//!
//! - `ConsoleDisplay`: standard output
//! - `TracingDisplay`: `tracing::info!` events
//! - `RecordingDisplay`: keeps every line in memory (tests, replays)
//! - `NullDisplay`: discards everything

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink for human-readable game messages.
pub trait Display: Send + Sync {
    /// Write `text`, optionally followed by a newline.
    fn write(&self, text: &str, newline: bool);

    /// Write `text` as a full line.
    fn message(&self, text: &str) {
        self.write(text, true);
    }
}

/// Prints messages to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn write(&self, text: &str, newline: bool) {
        if let Err(e) = write_text(&mut io::stdout().lock(), text, newline) {
            tracing::warn!(error = %e, "console write failed");
        }
    }
}

/// Partial lines are flushed so prompts show up before the newline.
fn write_text(out: &mut impl Write, text: &str, newline: bool) -> io::Result<()> {
    if newline {
        writeln!(out, "{}", text)
    } else {
        write!(out, "{}", text)?;
        out.flush()
    }
}

/// Forwards messages to the `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDisplay;

impl Display for TracingDisplay {
    fn write(&self, text: &str, _newline: bool) {
        tracing::info!(target: "mau_mau::display", "{}", text);
    }
}

/// Drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn write(&self, _text: &str, _newline: bool) {}
}

/// Keeps messages in memory.
///
/// Text written without a newline is joined with whatever comes next on
/// the same line.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    buffer: Mutex<RecordingBuffer>,
}

#[derive(Debug, Default)]
struct RecordingBuffer {
    lines: Vec<String>,
    partial: String,
}

impl RecordingDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, RecordingBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All completed lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.buffer().lines.clone()
    }

    /// Does any completed line equal `text`?
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.buffer().lines.iter().any(|line| line == text)
    }

    /// Number of completed lines starting with `prefix`.
    #[must_use]
    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.buffer()
            .lines
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl Display for RecordingDisplay {
    fn write(&self, text: &str, newline: bool) {
        let mut buffer = self.buffer();
        buffer.partial.push_str(text);
        if newline {
            let line = std::mem::take(&mut buffer.partial);
            buffer.lines.push(line);
        }
    }
}
