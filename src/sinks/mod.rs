//! Sink implementations

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

pub use crate::core::Sink;

use crate::core::LogConfig;
use std::path::PathBuf;

/// Built-in output targets, in the order they are started and delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    File,
    Console,
}

impl SinkKind {
    pub const ALL: [SinkKind; 2] = [SinkKind::File, SinkKind::Console];

    /// The output-target flag that enables this sink.
    pub fn flag(&self) -> LogConfig {
        match self {
            SinkKind::File => LogConfig::ENABLE_FILE,
            SinkKind::Console => LogConfig::ENABLE_CONSOLE,
        }
    }

    /// Kinds enabled by `config`, in start order.
    pub fn enabled_in(config: LogConfig) -> impl Iterator<Item = SinkKind> {
        Self::ALL
            .into_iter()
            .filter(move |kind| config.contains(kind.flag()))
    }

    pub fn build(&self, config: LogConfig, root: Option<PathBuf>) -> Box<dyn Sink> {
        match self {
            SinkKind::File => Box::new(FileSink::new(root)),
            SinkKind::Console => Box::new(ConsoleSink::from_config(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_in_keeps_file_before_console() {
        let both = LogConfig::ENABLE_CONSOLE | LogConfig::ENABLE_FILE;
        let kinds: Vec<_> = SinkKind::enabled_in(both).collect();
        assert_eq!(kinds, vec![SinkKind::File, SinkKind::Console]);

        let none: Vec<_> = SinkKind::enabled_in(LogConfig::INCLUDE_LEVEL).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_build_names() {
        let config = LogConfig::default();
        assert_eq!(SinkKind::File.build(config, None).name(), "file");
        assert_eq!(SinkKind::Console.build(config, None).name(), "console");
    }
}
