//! Sink trait for record delivery targets

use super::{error::Result, record::Record};

/// A delivery target owned by the engine.
///
/// The engine builds a fresh set of sinks on every start, calls [`Sink::start`]
/// once before any delivery and [`Sink::stop`] once before dropping it. All
/// calls after `start` happen on the worker thread.
pub trait Sink: Send {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
    fn deliver(&mut self, record: &Record) -> Result<()>;

    /// Called after each drained batch.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Builds a sink for one engine start.
pub type SinkFactory = std::sync::Arc<dyn Fn() -> Box<dyn Sink> + Send + Sync>;
