//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON options error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File sink started without a root directory
    #[error("No log path configured for the file sink")]
    MissingLogPath,

    /// Sink used before `start` or after `stop`
    #[error("Sink '{sink}' is not started")]
    SinkNotStarted { sink: String },

    /// `start` called twice on the same sink
    #[error("Sink '{sink}' is already started")]
    SinkAlreadyStarted { sink: String },

    /// Sink panicked while handling a record
    #[error("Sink '{sink}' panicked: {message}")]
    SinkPanicked { sink: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Worker thread could not be spawned
    #[error("Failed to spawn log worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn not_started(sink: impl Into<String>) -> Self {
        LoggerError::SinkNotStarted { sink: sink.into() }
    }

    pub fn already_started(sink: impl Into<String>) -> Self {
        LoggerError::SinkAlreadyStarted { sink: sink.into() }
    }

    pub fn sink_panicked(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkPanicked {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
