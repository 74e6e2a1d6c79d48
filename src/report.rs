//! Log sink for user-facing progress lines.
//!
//! The rename pass reports everything it does through a [`LogSink`] so the
//! core stays free of any output dependency. The CLI hands it a
//! [`ConsoleSink`]; tests hand it a [`CaptureSink`].

use std::io::{self, IsTerminal, Write};

/// Sink accepting human-readable progress/status/error lines.
/// Fire-and-forget: implementations must not fail the caller.
pub trait LogSink {
    fn line(&mut self, message: &str);
}

/// Sink writing each line to stdout.
pub struct ConsoleSink {
    writer: Box<dyn Write>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn line(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{}", message);
    }
}

/// Sink collecting lines in memory, for tests and embedding callers.
#[derive(Debug, Default)]
pub struct CaptureSink {
    pub lines: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

impl LogSink for CaptureSink {
    fn line(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check FORCE_COLOR env
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    io::stderr().is_terminal()
}
