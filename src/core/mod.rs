//! Core engine types and traits

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod mailbox;
pub mod metrics;
pub mod options;
pub mod record;
pub mod sink;

pub use config::LogConfig;
pub use engine::{Engine, EngineBuilder, DEFAULT_POLL_INTERVAL};
pub use error::{LoggerError, Result};
pub use formatter::CallSite;
pub use log_level::LogLevel;
pub use mailbox::Mailbox;
pub use metrics::EngineMetrics;
pub use options::EngineOptions;
pub use record::Record;
pub use sink::{Sink, SinkFactory};
