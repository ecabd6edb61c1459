//! Thread-safe FIFO between producers and the worker

use super::record::Record;
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// Unbounded, ordered queue of records.
///
/// Producers append with [`Mailbox::enqueue`]; the worker detaches everything
/// queued so far with [`Mailbox::try_dequeue_all`]. Both run under one lock,
/// so order is preserved across threads.
#[derive(Debug, Default)]
pub struct Mailbox {
    queue: Mutex<Vec<Record>>,
    ready: Condvar,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, record: Record) {
        let mut queue = self.queue.lock();
        queue.push(record);
        self.ready.notify_one();
    }

    /// Takes every queued record, oldest first. Empty when nothing is queued.
    pub fn try_dequeue_all(&self) -> Vec<Record> {
        std::mem::take(&mut *self.queue.lock())
    }

    /// Blocks until a record is queued, [`Mailbox::wake`] is called, or
    /// `timeout` elapses.
    ///
    /// Returns immediately if records are already queued or `keep_waiting`
    /// is false. `keep_waiting` is checked under the queue lock, so a state
    /// change followed by `wake` is never missed.
    pub fn wait_for_records<F>(&self, timeout: Duration, keep_waiting: F)
    where
        F: FnOnce() -> bool,
    {
        let mut queue = self.queue.lock();
        if queue.is_empty() && keep_waiting() {
            let _ = self.ready.wait_for(&mut queue, timeout);
        }
    }

    /// Wakes a worker blocked in [`Mailbox::wait_for_records`].
    pub fn wake(&self) {
        let _queue = self.queue.lock();
        self.ready.notify_all();
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
