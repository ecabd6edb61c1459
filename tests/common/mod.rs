//! Helpers shared by the integration test binaries

use mailbox_logger::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records the content of every delivered record.
pub struct CaptureSink {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl Sink for CaptureSink {
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn deliver(&mut self, record: &Record) -> Result<()> {
        self.lines.lock().push(record.content().to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}
