//! Logging engine
//!
//! Producers call [`Engine::push_message`] from any thread; the record is
//! formatted on the calling thread and queued in the mailbox. A single worker
//! thread, alive between [`Engine::start`] and [`Engine::stop`], drains the
//! mailbox and hands every record to each active sink in order.
//!
//! Worker states:
//!
//! ```text
//! Idle -> Starting (spawned) -> Running (handshake sent) -> Stopping (flag cleared) -> Idle
//! ```
//!
//! The worker always performs one more full drain after it sees the running
//! flag cleared, so nothing pushed before `stop` is lost. A record pushed
//! concurrently with `stop` may miss that drain; it stays queued and goes out
//! after the next `start`.

use super::{
    clock,
    config::LogConfig,
    error::{LoggerError, Result},
    formatter::{self, CallSite},
    log_level::LogLevel,
    mailbox::Mailbox,
    metrics::EngineMetrics,
    record::Record,
    sink::{Sink, SinkFactory},
};
use crate::sinks::SinkKind;
use crossbeam_channel::bounded;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Upper bound on how long the worker sleeps with an empty mailbox.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

const WORKER_THREAD_NAME: &str = "log-worker";

const BANNER_RULE: &str = "====================";

/// State shared with the worker thread.
struct Shared {
    config: AtomicU32,
    enabled: AtomicBool,
    running: AtomicBool,
    mailbox: Mailbox,
    sinks: Mutex<Vec<Box<dyn Sink>>>,
    metrics: EngineMetrics,
    poll_interval: Duration,
}

impl Shared {
    fn enqueue(&self, record: Record) {
        self.mailbox.enqueue(record);
        self.metrics.record_enqueued();
    }

    fn enqueue_raw(&self, body: impl Into<String>) {
        self.enqueue(Record::new(LogLevel::Info, clock::now(), body.into()));
    }

    fn run_worker(&self) {
        loop {
            // Read the flag before draining: once it is seen cleared, this
            // drain covers everything pushed before `stop` cleared it.
            let keep_running = self.running.load(Ordering::Acquire);

            self.deliver_batch(self.mailbox.try_dequeue_all());

            if !keep_running {
                break;
            }
            self.mailbox
                .wait_for_records(self.poll_interval, || self.running.load(Ordering::Acquire));
        }
    }

    /// Delivers `batch` to every active sink, in registration order.
    ///
    /// A sink that errors or panics is reported and skipped for that record;
    /// the other sinks and the loop keep going.
    fn deliver_batch(&self, batch: Vec<Record>) {
        if batch.is_empty() {
            return;
        }

        let mut sinks = self.sinks.lock();

        for record in &batch {
            let mut has_error = false;

            for sink in sinks.iter_mut() {
                if let Err(e) = guarded(sink, |s| s.deliver(record)) {
                    report_sink_error("delivery", sink.name(), &e);
                    self.metrics.record_delivery_failure();
                    has_error = true;
                }
            }

            if !has_error {
                self.metrics.record_delivered();
            }
        }

        for sink in sinks.iter_mut() {
            if let Err(e) = guarded(sink, |s| s.flush()) {
                report_sink_error("flush", sink.name(), &e);
            }
        }
    }

    fn stop_sinks(&self) {
        let mut sinks = self.sinks.lock();
        for mut sink in sinks.drain(..) {
            if let Err(e) = guarded(&mut sink, |s| s.stop()) {
                report_sink_error("stop", sink.name(), &e);
            }
        }
    }
}

/// Runs one sink operation, turning a panic into [`LoggerError::SinkPanicked`].
fn guarded<F>(sink: &mut Box<dyn Sink>, op: F) -> Result<()>
where
    F: FnOnce(&mut dyn Sink) -> Result<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| op(&mut **sink))) {
        Ok(result) => result,
        Err(panic_info) => Err(LoggerError::sink_panicked(
            sink.name(),
            panic_message(&*panic_info),
        )),
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn report_sink_error(operation: &str, name: &str, err: &LoggerError) {
    match err {
        LoggerError::SinkPanicked { .. } => eprintln!(
            "[LOGGER CRITICAL] {}. Other sinks continue to function.",
            err
        ),
        _ => eprintln!("[LOGGER ERROR] Sink '{}' {} failed: {}", name, operation, err),
    }
}

/// The logging engine.
///
/// Construct one per process (or per subsystem) and share it by reference or
/// `Arc`; every method takes `&self`.
///
/// # Example
///
/// ```no_run
/// use mailbox_logger::{Engine, LogConfig, LogLevel};
///
/// let engine = Engine::builder()
///     .config(LogConfig::ENABLE_CONSOLE | LogConfig::INCLUDE_LEVEL)
///     .build();
///
/// assert!(engine.start());
/// engine.push_message(LogLevel::Info, file!(), line!(), "service ready");
/// engine.stop();
/// ```
pub struct Engine {
    shared: Arc<Shared>,
    root_path: RwLock<Option<PathBuf>>,
    factories: RwLock<Vec<SinkFactory>>,
    /// Also serializes `start` and `stop`.
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Replaces the whole bitmask.
    ///
    /// Format flags apply to records pushed afterwards; target flags and
    /// color apply from the next `start`. Running sinks are not rebuilt.
    pub fn set_config(&self, config: LogConfig) {
        self.shared.config.store(config.bits(), Ordering::Relaxed);
    }

    pub fn config(&self) -> LogConfig {
        LogConfig::from_bits(self.shared.config.load(Ordering::Relaxed))
    }

    /// Directory the file sink writes into, used from the next `start`.
    pub fn set_log_path(&self, path: impl Into<PathBuf>) {
        *self.root_path.write() = Some(path.into());
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.root_path.read().clone()
    }

    /// When disabled, pushes are dropped instead of queued.
    pub fn set_enable(&self, enabled: bool) {
        self.shared.enabled.store(enabled, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::Acquire)
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Adds a sink built on every `start`, after the built-in file and
    /// console sinks.
    pub fn register_sink<F>(&self, factory: F)
    where
        F: Fn() -> Box<dyn Sink> + Send + Sync + 'static,
    {
        self.factories.write().push(Arc::new(factory));
    }

    /// Starts the worker.
    ///
    /// Returns `false` when already running, when disabled, when the worker
    /// cannot be spawned, or when sinks were configured and none of them
    /// started. Sinks that fail to start are left out; the rest run.
    ///
    /// Does not return until the worker has begun running.
    pub fn start(&self) -> bool {
        let mut worker = self.worker.lock();

        if worker.is_some() || self.is_running() {
            return false;
        }
        if !self.is_enabled() {
            return false;
        }
        if !self.init_sinks() {
            return false;
        }

        let (ready_tx, ready_rx) = bounded::<()>(1);
        let shared = Arc::clone(&self.shared);

        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || {
                shared.running.store(true, Ordering::Release);
                let _ = ready_tx.send(());
                shared.run_worker();
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}", LoggerError::WorkerSpawn(e));
                self.shared.stop_sinks();
                return false;
            }
        };

        if ready_rx.recv().is_err() {
            // the worker died before the handshake
            if handle.join().is_err() {
                eprintln!("[LOGGER ERROR] Log worker panicked during startup");
            }
            self.shared.running.store(false, Ordering::Release);
            self.shared.stop_sinks();
            return false;
        }

        *worker = Some(handle);

        self.shared
            .enqueue_raw(format!("{} Startup {}", BANNER_RULE, BANNER_RULE));
        self.shared.enqueue_raw(format!(
            "Logging started at {} ({})",
            clock::format_timestamp(&clock::now()),
            self.config()
        ));

        true
    }

    /// Builds and starts the sink list for this run.
    fn init_sinks(&self) -> bool {
        let config = self.config();
        let root = self.log_path();

        let mut candidates: Vec<Box<dyn Sink>> = SinkKind::enabled_in(config)
            .map(|kind| kind.build(config, root.clone()))
            .collect();
        let mut attempted = candidates.len();

        for factory in self.factories.read().iter() {
            attempted += 1;
            match panic::catch_unwind(AssertUnwindSafe(|| factory())) {
                Ok(sink) => candidates.push(sink),
                Err(panic_info) => eprintln!(
                    "[LOGGER CRITICAL] Sink factory panicked: {}. Other sinks continue to function.",
                    panic_message(&*panic_info)
                ),
            }
        }

        let mut active = Vec::with_capacity(candidates.len());

        for mut sink in candidates {
            match guarded(&mut sink, |s| s.start()) {
                Ok(()) => active.push(sink),
                Err(e) => report_sink_error("start", sink.name(), &e),
            }
        }

        if active.len() < attempted {
            eprintln!(
                "[LOGGER WARNING] {} of {} sinks started",
                active.len(),
                attempted
            );
        }

        let usable = attempted == 0 || !active.is_empty();
        *self.shared.sinks.lock() = active;
        usable
    }

    /// Queues the shutdown banner, clears the running flag and waits for the
    /// worker to drain and exit. Active sinks are stopped and discarded.
    ///
    /// Does nothing when not running.
    pub fn stop(&self) {
        let mut worker = self.worker.lock();

        let Some(handle) = worker.take() else {
            return;
        };

        self.shared
            .enqueue_raw(format!("{} Shutdown {}", BANNER_RULE, BANNER_RULE));
        self.shared.enqueue_raw(String::new());

        self.shared.running.store(false, Ordering::Release);
        self.shared.mailbox.wake();

        if handle.join().is_err() {
            eprintln!("[LOGGER ERROR] Log worker panicked during shutdown");
        }

        self.shared.stop_sinks();
    }

    /// Formats `body` with the current config and queues it.
    ///
    /// Never blocks beyond the mailbox lock. Dropped when disabled.
    pub fn push_message(&self, level: LogLevel, file: &str, line: u32, body: &str) {
        if !self.is_enabled() {
            self.shared.metrics.record_dropped_disabled();
            return;
        }

        let record = formatter::build_record(
            self.config(),
            level,
            clock::now(),
            Some(CallSite::new(file, line)),
            body,
        );
        self.shared.enqueue(record);
    }

    /// Queues `body` as an undecorated Info record. Dropped when disabled.
    pub fn push_raw(&self, body: &str) {
        if !self.is_enabled() {
            self.shared.metrics.record_dropped_disabled();
            return;
        }
        self.shared.enqueue_raw(body);
    }

    /// Records queued and not yet drained.
    pub fn pending_count(&self) -> usize {
        self.shared.mailbox.len()
    }

    /// Names of the sinks started by the current run, in delivery order.
    pub fn active_sink_names(&self) -> Vec<String> {
        self.shared
            .sinks
            .lock()
            .iter()
            .map(|sink| sink.name().to_string())
            .collect()
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.shared.metrics
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Builder for constructing an [`Engine`] with a fluent API
///
/// # Example
/// ```
/// use mailbox_logger::prelude::*;
/// use std::time::Duration;
///
/// let engine = Engine::builder()
///     .config(LogConfig::ENABLE_CONSOLE | LogConfig::INCLUDE_DATETIME)
///     .poll_interval(Duration::from_millis(20))
///     .build();
///
/// assert!(!engine.is_running());
/// ```
pub struct EngineBuilder {
    config: LogConfig,
    log_path: Option<PathBuf>,
    enabled: bool,
    poll_interval: Duration,
    factories: Vec<SinkFactory>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            log_path: None,
            enabled: true,
            poll_interval: DEFAULT_POLL_INTERVAL,
            factories: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Longest idle wait between mailbox checks. Clamped to at least 1ms.
    #[must_use = "builder methods return a new value"]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// See [`Engine::register_sink`].
    #[must_use = "builder methods return a new value"]
    pub fn sink<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Sink> + Send + Sync + 'static,
    {
        self.factories.push(Arc::new(factory));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            shared: Arc::new(Shared {
                config: AtomicU32::new(self.config.bits()),
                enabled: AtomicBool::new(self.enabled),
                running: AtomicBool::new(false),
                mailbox: Mailbox::new(),
                sinks: Mutex::new(Vec::new()),
                metrics: EngineMetrics::new(),
                poll_interval: self.poll_interval,
            }),
            root_path: RwLock::new(self.log_path),
            factories: RwLock::new(self.factories),
            worker: Mutex::new(None),
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records everything it is given; optionally fails `start`.
    struct CaptureSink {
        lines: Arc<Mutex<Vec<String>>>,
        fail_start: bool,
    }

    impl Sink for CaptureSink {
        fn start(&mut self) -> Result<()> {
            if self.fail_start {
                Err(LoggerError::other("refused"))
            } else {
                Ok(())
            }
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

    struct PanicSink;

    impl Sink for PanicSink {
        fn start(&mut self) -> Result<()> {
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            Ok(())
        }

        fn deliver(&mut self, _record: &Record) -> Result<()> {
            panic!("sink exploded");
        }

        fn name(&self) -> &str {
            "panic"
        }
    }

    /// Panics in `start`.
    struct StartPanicSink;

    impl Sink for StartPanicSink {
        fn start(&mut self) -> Result<()> {
            panic!("cannot open device");
        }

        fn stop(&mut self) -> Result<()> {
            Ok(())
        }

        fn deliver(&mut self, _record: &Record) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "start-panic"
        }
    }

    /// Returns an error from every delivery.
    struct FailingSink;

    impl Sink for FailingSink {
        fn start(&mut self) -> Result<()> {
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            Ok(())
        }

        fn deliver(&mut self, _record: &Record) -> Result<()> {
            Err(LoggerError::other("device full"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn capture_engine(config: LogConfig) -> (Engine, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let engine = Engine::builder()
            .config(config)
            .poll_interval(Duration::from_millis(10))
            .sink(move || {
                Box::new(CaptureSink {
                    lines: Arc::clone(&sink_lines),
                    fail_start: false,
                })
            })
            .build();
        (engine, lines)
    }

    fn bodies(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .filter(|l| l.starts_with("msg"))
            .cloned()
            .collect()
    }

    #[test]
    fn test_double_start_returns_false() {
        let (engine, _lines) = capture_engine(LogConfig::empty());

        assert!(engine.start());
        assert!(engine.is_running());
        assert!(!engine.start());
        assert!(engine.is_running());

        engine.stop();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_start_fails_when_disabled() {
        let (engine, _lines) = capture_engine(LogConfig::empty());
        engine.set_enable(false);

        assert!(!engine.start());
        assert!(!engine.is_running());
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let (engine, lines) = capture_engine(LogConfig::empty());
        engine.stop();
        assert!(lines.lock().is_empty());
        assert_eq!(engine.pending_count(), 0);
    }

    #[test]
    fn test_drain_before_exit_and_banners() {
        let (engine, lines) = capture_engine(LogConfig::empty());
        assert!(engine.start());

        for i in 0..20 {
            engine.push_message(LogLevel::Info, file!(), line!(), &format!("msg {}", i));
        }
        engine.stop();

        let lines = lines.lock();
        let expected: Vec<String> = (0..20).map(|i| format!("msg {}", i)).collect();
        assert_eq!(bodies(&lines), expected);

        assert!(lines[0].contains("Startup"));
        assert!(lines[1].starts_with("Logging started at"));
        assert!(lines[lines.len() - 2].contains("Shutdown"));
        assert_eq!(lines[lines.len() - 1], "");
        assert_eq!(engine.pending_count(), 0);
    }

    #[test]
    fn test_disabled_push_is_dropped() {
        let (engine, lines) = capture_engine(LogConfig::empty());
        engine.set_enable(false);

        for _ in 0..10 {
            engine.push_message(LogLevel::Error, file!(), line!(), "msg dropped");
        }
        engine.push_raw("msg raw");

        assert_eq!(engine.pending_count(), 0);
        assert_eq!(engine.metrics().dropped_disabled(), 11);
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_push_while_idle_is_delivered_on_next_start() {
        let (engine, lines) = capture_engine(LogConfig::empty());

        engine.push_message(LogLevel::Info, file!(), line!(), "msg early");
        assert_eq!(engine.pending_count(), 1);

        assert!(engine.start());
        engine.stop();

        assert_eq!(bodies(&lines.lock()), vec!["msg early".to_string()]);
    }

    #[test]
    fn test_config_snapshot_taken_at_push() {
        let (engine, lines) = capture_engine(LogConfig::INCLUDE_LEVEL);

        engine.push_message(LogLevel::Warn, "a.rs", 1, "old");
        engine.set_config(LogConfig::INCLUDE_FILE_LINE);
        engine.push_message(LogLevel::Warn, "a.rs", 2, "new");

        assert!(engine.start());
        engine.stop();

        let lines = lines.lock();
        assert!(lines.contains(&"[WARN ]old".to_string()));
        assert!(lines.contains(&"new[a.rs:2]".to_string()));
    }

    #[test]
    fn test_all_sinks_failing_keeps_engine_idle() {
        let engine = Engine::builder()
            .config(LogConfig::ENABLE_FILE)
            .sink(|| {
                Box::new(CaptureSink {
                    lines: Arc::new(Mutex::new(Vec::new())),
                    fail_start: true,
                })
            })
            .build();

        assert!(!engine.start());
        assert!(!engine.is_running());
        assert!(engine.active_sink_names().is_empty());
    }

    #[test]
    fn test_partial_sink_failure_still_runs() {
        // file sink has no root path and fails; the capture sink starts
        let (engine, lines) = capture_engine(LogConfig::ENABLE_FILE);

        assert!(engine.start());
        assert_eq!(engine.active_sink_names(), vec!["capture".to_string()]);

        engine.push_raw("msg survived");
        engine.stop();

        assert_eq!(bodies(&lines.lock()), vec!["msg survived".to_string()]);
        assert!(engine.active_sink_names().is_empty());
    }

    #[test]
    fn test_panicking_sink_is_isolated() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let engine = Engine::builder()
            .config(LogConfig::empty())
            .poll_interval(Duration::from_millis(10))
            .sink(|| Box::new(PanicSink))
            .sink(move || {
                Box::new(CaptureSink {
                    lines: Arc::clone(&sink_lines),
                    fail_start: false,
                })
            })
            .build();

        assert!(engine.start());
        engine.push_raw("msg one");
        engine.push_raw("msg two");
        engine.stop();

        assert_eq!(
            bodies(&lines.lock()),
            vec!["msg one".to_string(), "msg two".to_string()]
        );
        assert!(engine.metrics().delivery_failures() >= 2);
        assert_eq!(engine.metrics().delivered(), 0);
    }

    #[test]
    fn test_sink_panicking_in_start_is_left_out() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let engine = Engine::builder()
            .config(LogConfig::empty())
            .poll_interval(Duration::from_millis(10))
            .sink(|| Box::new(StartPanicSink))
            .sink(move || {
                Box::new(CaptureSink {
                    lines: Arc::clone(&sink_lines),
                    fail_start: false,
                })
            })
            .build();

        let started = panic::catch_unwind(AssertUnwindSafe(|| engine.start()));
        assert!(matches!(started, Ok(true)));
        assert_eq!(engine.active_sink_names(), vec!["capture".to_string()]);

        engine.push_raw("msg after panic");
        engine.stop();

        assert_eq!(bodies(&lines.lock()), vec!["msg after panic".to_string()]);
    }

    #[test]
    fn test_only_sink_panicking_keeps_engine_idle() {
        let engine = Engine::builder()
            .config(LogConfig::empty())
            .sink(|| Box::new(StartPanicSink))
            .build();

        let started = panic::catch_unwind(AssertUnwindSafe(|| engine.start()));
        assert!(matches!(started, Ok(false)));
        assert!(!engine.is_running());
    }

    #[test]
    fn test_panicking_factory_is_left_out() {
        let (engine, lines) = capture_engine(LogConfig::empty());
        engine.register_sink(|| panic!("factory exploded"));

        let started = panic::catch_unwind(AssertUnwindSafe(|| engine.start()));
        assert!(matches!(started, Ok(true)));
        assert_eq!(engine.active_sink_names(), vec!["capture".to_string()]);

        engine.push_raw("msg kept");
        engine.stop();

        assert_eq!(bodies(&lines.lock()), vec!["msg kept".to_string()]);
    }

    #[test]
    fn test_failing_sink_does_not_stop_delivery() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let engine = Engine::builder()
            .config(LogConfig::empty())
            .poll_interval(Duration::from_millis(10))
            .sink(|| Box::new(FailingSink))
            .sink(move || {
                Box::new(CaptureSink {
                    lines: Arc::clone(&sink_lines),
                    fail_start: false,
                })
            })
            .build();

        assert!(engine.start());
        for i in 0..5 {
            engine.push_raw(&format!("msg {}", i));
        }
        engine.stop();

        let expected: Vec<String> = (0..5).map(|i| format!("msg {}", i)).collect();
        assert_eq!(bodies(&lines.lock()), expected);

        // 2 startup banners + 5 messages + 2 shutdown lines
        assert_eq!(engine.metrics().delivery_failures(), 9);
        assert_eq!(engine.metrics().delivered(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_restart_rebuilds_sinks() {
        let (engine, lines) = capture_engine(LogConfig::empty());

        assert!(engine.start());
        engine.push_raw("msg first run");
        engine.stop();

        assert!(engine.start());
        engine.push_raw("msg second run");
        engine.stop();

        assert_eq!(
            bodies(&lines.lock()),
            vec!["msg first run".to_string(), "msg second run".to_string()]
        );
        assert_eq!(
            lines.lock().iter().filter(|l| l.contains("Startup")).count(),
            2
        );
    }

    #[test]
    fn test_drop_stops_worker() {
        let (engine, lines) = capture_engine(LogConfig::empty());
        assert!(engine.start());
        engine.push_raw("msg before drop");
        drop(engine);

        assert_eq!(bodies(&lines.lock()), vec!["msg before drop".to_string()]);
    }

    #[test]
    fn test_builder_poll_interval_is_clamped() {
        let engine = Engine::builder().poll_interval(Duration::ZERO).build();
        assert_eq!(engine.shared.poll_interval, MIN_POLL_INTERVAL);
    }
}
