//! Configuration bitmask
//!
//! A [`LogConfig`] selects the output targets started by the engine and the
//! decorations the formatter puts around each message body. Flags are
//! independent and combine with `|`.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogConfig(u32);

impl LogConfig {
    /* output targets */
    pub const ENABLE_FILE: LogConfig = LogConfig(0x0001);
    pub const ENABLE_CONSOLE: LogConfig = LogConfig(0x0002);

    /* message format */
    pub const INCLUDE_DATETIME: LogConfig = LogConfig(0x0100);
    pub const INCLUDE_LEVEL: LogConfig = LogConfig(0x0200);
    pub const INCLUDE_FILE_LINE: LogConfig = LogConfig(0x0400);
    /// Console only.
    pub const INCLUDE_COLOR: LogConfig = LogConfig(0x0800);
    /// Declared for compatibility; has no effect.
    pub const RESERVED_ERROR_STACK: LogConfig = LogConfig(0x1000);

    const NAMED: [(&'static str, LogConfig); 7] = [
        ("file", Self::ENABLE_FILE),
        ("console", Self::ENABLE_CONSOLE),
        ("datetime", Self::INCLUDE_DATETIME),
        ("level", Self::INCLUDE_LEVEL),
        ("fileline", Self::INCLUDE_FILE_LINE),
        ("color", Self::INCLUDE_COLOR),
        ("errorstack", Self::RESERVED_ERROR_STACK),
    ];

    #[must_use]
    pub const fn empty() -> Self {
        LogConfig(0)
    }

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        LogConfig(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is set.
    #[inline]
    pub const fn contains(&self, other: LogConfig) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: LogConfig) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: LogConfig) {
        self.0 &= !other.0;
    }

    /// Returns a copy with `other` set or cleared.
    #[must_use]
    pub fn with(mut self, other: LogConfig, enabled: bool) -> Self {
        if enabled {
            self.insert(other);
        } else {
            self.remove(other);
        }
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::ENABLE_CONSOLE
            | LogConfig::INCLUDE_DATETIME
            | LogConfig::INCLUDE_LEVEL
            | LogConfig::INCLUDE_FILE_LINE
            | LogConfig::INCLUDE_COLOR
    }
}

impl BitOr for LogConfig {
    type Output = LogConfig;

    fn bitor(self, rhs: LogConfig) -> LogConfig {
        LogConfig(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogConfig {
    fn bitor_assign(&mut self, rhs: LogConfig) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LogConfig {
    type Output = LogConfig;

    fn bitand(self, rhs: LogConfig) -> LogConfig {
        LogConfig(self.0 & rhs.0)
    }
}

impl Not for LogConfig {
    type Output = LogConfig;

    fn not(self) -> LogConfig {
        LogConfig(!self.0)
    }
}

impl fmt::Display for LogConfig {
    /// Writes the set flag names joined by `|`, or `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

impl FromStr for LogConfig {
    type Err = LoggerError;

    /// Parses flag names separated by `|`, `,` or whitespace.
    ///
    /// ```
    /// use mailbox_logger::LogConfig;
    ///
    /// let config: LogConfig = "console | level, datetime".parse().unwrap();
    /// assert!(config.contains(LogConfig::ENABLE_CONSOLE | LogConfig::INCLUDE_LEVEL));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = LogConfig::empty();

        for token in s
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            if token == "none" {
                continue;
            }
            let flag = Self::NAMED
                .iter()
                .find(|(name, _)| *name == token)
                .map(|(_, flag)| *flag)
                .ok_or_else(|| {
                    LoggerError::config("LogConfig", format!("unknown flag '{}'", token))
                })?;
            config.insert(flag);
        }

        Ok(config)
    }
}
