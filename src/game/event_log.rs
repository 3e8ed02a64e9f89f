//! Bounded session log shown in the info panel.

use crate::core::constants::EVENT_LOG_CAPACITY;
use std::collections::VecDeque;

/// Severity/flavour of a log entry (drives its colour in the UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Milestone,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

/// Ring of the most recent entries; the oldest is dropped once full.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) {
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            message: message.into(),
            kind,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, LogKind::Info);
    }

    pub fn milestone(&mut self, message: impl Into<String>) {
        self.push(message, LogKind::Milestone);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(message, LogKind::Warning);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
