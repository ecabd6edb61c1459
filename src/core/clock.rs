//! Wall-clock helpers
//!
//! Timestamps are captured in the local time zone when a record is pushed.

use chrono::{DateTime, Local};

/// Header timestamp layout: `2024/03/09 14:05:07.042`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Log file name stem layout: `20240309-140507`
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

#[inline]
pub fn now() -> DateTime<Local> {
    Local::now()
}

#[must_use]
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[must_use]
pub fn format_file_stamp(time: &DateTime<Local>) -> String {
    time.format(FILE_STAMP_FORMAT).to_string()
}
