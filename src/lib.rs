//! # Mailbox Logger
//!
//! An in-process asynchronous logging engine. Callers push pre-formatted
//! messages from any thread; a single worker thread drains them in order and
//! writes each one to the console and/or a log file.
//!
//! ## Features
//!
//! - **Cheap producers**: formatting happens at push time, writing happens on the worker
//! - **Ordered delivery**: one FIFO mailbox, one consumer
//! - **Configurable headers**: timestamp, level, `file:line` and color via a bitmask
//! - **Explicit lifecycle**: `start`/`stop` on an engine handle you own
//!
//! ```no_run
//! use mailbox_logger::prelude::*;
//! use mailbox_logger::{info, warn};
//!
//! let engine = Engine::builder()
//!     .config(LogConfig::default() | LogConfig::ENABLE_FILE)
//!     .log_path("/var/log/myapp")
//!     .build();
//!
//! engine.start();
//! info!(engine, "listening on port {}", 8080);
//! warn!(engine, "cache at {}%", 91);
//! engine.stop();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Engine, EngineBuilder, EngineMetrics, EngineOptions, LogConfig, LogLevel,
        LoggerError, Record, Result, Sink, DEFAULT_POLL_INTERVAL,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, SinkKind};
}

pub use crate::core::{
    CallSite, Engine, EngineBuilder, EngineMetrics, EngineOptions, LogConfig, LogLevel,
    LoggerError, Mailbox, Record, Result, Sink, SinkFactory, DEFAULT_POLL_INTERVAL,
};
pub use sinks::{ConsoleSink, FileSink, SinkKind};
