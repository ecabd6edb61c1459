//! Record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One fully formatted log line.
///
/// Built once when a message is pushed and never modified afterwards; sinks
/// only ever see it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    level: LogLevel,
    timestamp: DateTime<Local>,
    content: String,
}

impl Record {
    pub fn new(level: LogLevel, timestamp: DateTime<Local>, content: String) -> Self {
        Self {
            level,
            timestamp,
            content,
        }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// The line as it is written, without a terminator.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
