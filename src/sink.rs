//! Observability sinks the game reports through.
//!
//! The engine never logs to process-wide state directly. It is handed an
//! [`EventSink`] at construction and writes every message there. The
//! default [`LogSink`] forwards to the [`log`] facade, so whatever logger
//! the host installs (for example `env_logger`) receives the messages.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use log::Level;

/// Log target used by [`LogSink`].
pub const TARGET: &str = "jacks::game";

/// Receives diagnostic messages from the game.
pub trait EventSink {
    /// Records a debug message.
    fn debug(&mut self, message: fmt::Arguments<'_>);
    /// Records an informational message.
    fn info(&mut self, message: fmt::Arguments<'_>);
    /// Records a rejected operation.
    fn warning(&mut self, message: fmt::Arguments<'_>);
    /// Records an error.
    fn error(&mut self, message: fmt::Arguments<'_>);
}

/// Forwards messages to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn debug(&mut self, message: fmt::Arguments<'_>) {
        log::debug!(target: TARGET, "{message}");
    }

    fn info(&mut self, message: fmt::Arguments<'_>) {
        log::info!(target: TARGET, "{message}");
    }

    fn warning(&mut self, message: fmt::Arguments<'_>) {
        log::warn!(target: TARGET, "{message}");
    }

    fn error(&mut self, message: fmt::Arguments<'_>) {
        log::error!(target: TARGET, "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn debug(&mut self, _message: fmt::Arguments<'_>) {}
    fn info(&mut self, _message: fmt::Arguments<'_>) {}
    fn warning(&mut self, _message: fmt::Arguments<'_>) {}
    fn error(&mut self, _message: fmt::Arguments<'_>) {}
}

/// Keeps every message in memory, in order.
///
/// Useful for tests and for presentation layers that show a message log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<(Level, String)>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns every recorded message.
    #[must_use]
    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// Returns the messages recorded at `level`.
    pub fn messages(&self, level: Level) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .filter(move |(recorded, _)| *recorded == level)
            .map(|(_, message)| message.as_str())
    }

    /// Drops every recorded message.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn push(&mut self, level: Level, message: fmt::Arguments<'_>) {
        self.records.push((level, message.to_string()));
    }
}

impl EventSink for RecordingSink {
    fn debug(&mut self, message: fmt::Arguments<'_>) {
        self.push(Level::Debug, message);
    }

    fn info(&mut self, message: fmt::Arguments<'_>) {
        self.push(Level::Info, message);
    }

    fn warning(&mut self, message: fmt::Arguments<'_>) {
        self.push(Level::Warn, message);
    }

    fn error(&mut self, message: fmt::Arguments<'_>) {
        self.push(Level::Error, message);
    }
}
