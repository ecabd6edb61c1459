//! Console sink implementation

use crate::core::{LogConfig, Record, Result, Sink};
use std::io::{self, Write};

/// ANSI sequence that restores the default attributes.
const RESET: &str = "\x1b[0m";

/// Writes one line per record to standard output (or an injected writer),
/// colored by level when enabled.
///
/// Color depends only on the flag: terminal detection and `NO_COLOR` are not
/// consulted, so piped output keeps its escapes.
pub struct ConsoleSink {
    use_colors: bool,
    writer: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn new(use_colors: bool) -> Self {
        Self::with_writer(use_colors, Box::new(io::stdout()))
    }

    /// Takes the color setting from [`LogConfig::INCLUDE_COLOR`].
    pub fn from_config(config: LogConfig) -> Self {
        Self::new(config.contains(LogConfig::INCLUDE_COLOR))
    }

    pub fn with_writer(use_colors: bool, writer: Box<dyn Write + Send>) -> Self {
        Self { use_colors, writer }
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }
}

impl Sink for ConsoleSink {
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn deliver(&mut self, record: &Record) -> Result<()> {
        if self.use_colors {
            let prefix = record.level().color_code().to_fg_str();
            write!(self.writer, "\x1b[{}m{}\n{}", prefix, record.content(), RESET)?;
        } else {
            writeln!(self.writer, "{}", record.content())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{clock, LogLevel};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn record(level: LogLevel, content: &str) -> Record {
        Record::new(level, clock::now(), content.to_string())
    }

    #[test]
    fn test_plain_output_has_no_escape_bytes() {
        let buf = SharedBuf::default();
        let mut sink = ConsoleSink::with_writer(false, Box::new(buf.clone()));
        sink.start().unwrap();

        for level in LogLevel::ALL {
            sink.deliver(&record(level, "line")).unwrap();
        }
        sink.stop().unwrap();

        let text = buf.text();
        assert!(!text.contains('\x1b'));
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|l| l == "line"));
    }

    #[test]
    fn test_colored_output_wraps_content() {
        let buf = SharedBuf::default();
        let mut sink = ConsoleSink::with_writer(true, Box::new(buf.clone()));
        sink.start().unwrap();
        sink.deliver(&record(LogLevel::Error, "failed")).unwrap();

        // prefix, content, newline, then reset
        let red = LogLevel::Error.color_code().to_fg_str();
        assert_eq!(buf.text(), format!("\x1b[{}mfailed\n\x1b[0m", red));
    }

    #[test]
    fn test_color_prefix_follows_level() {
        let buf = SharedBuf::default();
        let mut sink = ConsoleSink::with_writer(true, Box::new(buf.clone()));

        for level in LogLevel::ALL {
            sink.deliver(&record(level, "x")).unwrap();
        }

        let expected: String = LogLevel::ALL
            .iter()
            .map(|level| format!("\x1b[{}mx\n\x1b[0m", level.color_code().to_fg_str()))
            .collect();
        assert_eq!(buf.text(), expected);
    }

    #[test]
    fn test_from_config() {
        assert!(ConsoleSink::from_config(LogConfig::INCLUDE_COLOR).use_colors());
        assert!(!ConsoleSink::from_config(LogConfig::ENABLE_CONSOLE).use_colors());
    }
}
