//! Call-site macros for logging through an [`Engine`](crate::Engine).
//!
//! Each macro checks that the engine is enabled before formatting, captures
//! `file!()` and `line!()`, and calls `push_message`.
//!
//! # Examples
//!
//! ```
//! use mailbox_logger::prelude::*;
//! use mailbox_logger::info;
//!
//! let engine = Engine::new();
//!
//! // Basic logging
//! info!(engine, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(engine, "Server listening on port {}", port);
//! ```

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use mailbox_logger::prelude::*;
/// # let engine = Engine::new();
/// use mailbox_logger::log;
/// log!(engine, LogLevel::Info, "Simple message");
/// log!(engine, LogLevel::Error, "Error code: {}", 500);
/// assert_eq!(engine.pending_count(), 2);
/// ```
#[macro_export]
macro_rules! log {
    ($engine:expr, $level:expr, $($arg:tt)+) => {{
        let engine = &$engine;
        if engine.is_enabled() {
            engine.push_message($level, file!(), line!(), &format!($($arg)+));
        }
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use mailbox_logger::prelude::*;
/// # let engine = Engine::new();
/// use mailbox_logger::info;
/// info!(engine, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use mailbox_logger::prelude::*;
/// # let engine = Engine::new();
/// use mailbox_logger::error;
/// error!(engine, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Error, $($arg)+)
    };
}
