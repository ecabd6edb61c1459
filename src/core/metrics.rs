//! Engine metrics for observability
//!
//! Counters describing how many records went through the mailbox and how
//! many deliveries failed. Delivery failures never reach producers, so these
//! counters are the only place they are visible besides stderr.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use mailbox_logger::EngineMetrics;
///
/// let metrics = EngineMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.delivered(), 1);
/// ```
#[derive(Debug)]
pub struct EngineMetrics {
    /// Records placed in the mailbox
    enqueued: AtomicU64,

    /// Records handed to every active sink without error
    delivered: AtomicU64,

    /// Individual sink deliveries that returned an error or panicked
    delivery_failures: AtomicU64,

    /// Pushes ignored because the engine was disabled
    dropped_disabled: AtomicU64,
}

impl EngineMetrics {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            delivery_failures: AtomicU64::new(0),
            dropped_disabled: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivery_failures(&self) -> u64 {
        self.delivery_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_disabled(&self) -> u64 {
        self.dropped_disabled.load(Ordering::Relaxed)
    }

    /// Returns the previous value, like the other `record_*` methods.
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivery_failure(&self) -> u64 {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped_disabled(&self) -> u64 {
        self.dropped_disabled.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.enqueued.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.delivery_failures.store(0, Ordering::Relaxed);
        self.dropped_disabled.store(0, Ordering::Relaxed);
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EngineMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            enqueued: AtomicU64::new(self.enqueued()),
            delivered: AtomicU64::new(self.delivered()),
            delivery_failures: AtomicU64::new(self.delivery_failures()),
            dropped_disabled: AtomicU64::new(self.dropped_disabled()),
        }
    }
}
