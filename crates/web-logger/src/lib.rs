//! Web Logger
//!
//! `log` backend for browser apps: timestamped lines go to the developer
//! console (stderr outside wasm) and the most recent entries are kept in a
//! circular buffer so they can be inspected or attached to a bug report.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// Entries kept by the global logger
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time, `%H:%M:%S%.3f`
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Fixed-capacity buffer; the oldest entry goes first
#[derive(Debug)]
pub struct RingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

pub struct WebLogger {
    app_name: &'static str,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl WebLogger {
    pub fn new(app_name: &'static str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name,
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    pub fn recent_entries(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }
}

impl Log for WebLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_line(entry.level, &format!("{} {}", self.app_name, entry));

        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<WebLogger> = OnceLock::new();

/// Install the global logger. Fails if another logger is already set.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| WebLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Entries buffered by the global logger, oldest first
pub fn recent_entries() -> Vec<LogEntry> {
    LOGGER
        .get()
        .map(WebLogger::recent_entries)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00.000".to_string(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(2);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        buffer.push(entry("c"));
        assert_eq!(buffer.len(), 2);

        let messages: Vec<String> = buffer.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RingBuffer::new(0);
        buffer.push(entry("a"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = WebLogger::new("Test", LevelFilter::Warn, 8);

        logger.log(
            &Record::builder()
                .args(format_args!("list subscription failed"))
                .level(Level::Error)
                .target("wishlink_core::controller")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("snapshot applied"))
                .level(Level::Debug)
                .target("wishlink_core::controller")
                .build(),
        );

        let entries = logger.recent_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(entries[0].message, "list subscription failed");
    }

    #[test]
    fn test_entry_format() {
        assert_eq!(entry("hello").to_string(), "[12:00:00.000] INFO  test: hello");
    }
}
