//! Header assembly
//!
//! Turns a message body into the final record content according to the
//! format flags of a [`LogConfig`]:
//!
//! ```text
//! [2024/03/09 14:05:07.042][WARN ]disk low[main.rs:42]
//! ^ datetime              ^ level ^ body  ^ file:line
//! ```
//!
//! Color is not applied here; it belongs to the console sink.

use super::clock;
use super::config::LogConfig;
use super::log_level::LogLevel;
use super::record::Record;
use chrono::{DateTime, Local};

/// Source location of a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

/// Strips everything up to and including the last `/` or `\`.
pub fn basename(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Builds the `[timestamp][LEVEL]` header, empty when neither flag is set.
pub fn header(config: LogConfig, level: LogLevel, timestamp: &DateTime<Local>) -> String {
    let mut header = String::new();

    if config.contains(LogConfig::INCLUDE_DATETIME) {
        header.push('[');
        header.push_str(&clock::format_timestamp(timestamp));
        header.push(']');
    }
    if config.contains(LogConfig::INCLUDE_LEVEL) {
        header.push('[');
        header.push_str(level.label());
        header.push(']');
    }

    header
}

/// Builds the `[file:line]` tail, empty without a call site or the flag.
pub fn tail(config: LogConfig, site: Option<CallSite<'_>>) -> String {
    match site {
        Some(site) if config.contains(LogConfig::INCLUDE_FILE_LINE) => {
            format!("[{}:{}]", basename(site.file), site.line)
        }
        _ => String::new(),
    }
}

pub fn format_content(
    config: LogConfig,
    level: LogLevel,
    timestamp: &DateTime<Local>,
    site: Option<CallSite<'_>>,
    body: &str,
) -> String {
    let header = header(config, level, timestamp);
    let tail = tail(config, site);

    if header.is_empty() && tail.is_empty() {
        return body.to_string();
    }

    let mut content = String::with_capacity(header.len() + body.len() + tail.len());
    content.push_str(&header);
    content.push_str(body);
    content.push_str(&tail);
    content
}

/// Formats `body` and wraps it in a [`Record`] stamped with `timestamp`.
pub fn build_record(
    config: LogConfig,
    level: LogLevel,
    timestamp: DateTime<Local>,
    site: Option<CallSite<'_>>,
    body: &str,
) -> Record {
    let content = format_content(config, level, &timestamp, site, body);
    Record::new(level, timestamp, content)
}
