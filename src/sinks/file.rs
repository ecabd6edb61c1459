//! File sink implementation

use crate::core::{clock, LoggerError, Record, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records to `<root>/<YYYYMMDD-HHMMSS>.log`.
///
/// The file name is taken from the clock when the sink starts. Nothing is
/// opened until then, and a missing root directory is a start failure.
pub struct FileSink {
    root: Option<PathBuf>,
    path: Option<PathBuf>,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            path: None,
            writer: None,
        }
    }

    /// Path of the open log file, once started.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn log_file_path(root: &Path) -> PathBuf {
        root.join(format!("{}.log", clock::format_file_stamp(&clock::now())))
    }
}

impl Sink for FileSink {
    fn start(&mut self) -> Result<()> {
        if self.writer.is_some() {
            return Err(LoggerError::already_started(self.name()));
        }

        let root = self
            .root
            .as_deref()
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or(LoggerError::MissingLogPath)?;

        let path = Self::log_file_path(root);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        self.writer = Some(BufWriter::new(file));
        self.path = Some(path);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| LoggerError::not_started("file"))?;
        writer.flush()?;
        Ok(())
    }

    fn deliver(&mut self, record: &Record) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::not_started("file"))?;

        writer.write_all(record.content().as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
