//! Custom logging module.
//!
//! Log records are captured into a bounded buffer that the log panel reads
//! from, since the terminal is owned by the UI while the application runs.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared, bounded list of formatted log lines, oldest first.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Maximum number of log lines retained.
///
pub const LOG_CAPACITY: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Logger that appends formatted records to a [`LogBuffer`].
///
pub struct CaptureLogger {
    buffer: LogBuffer,
    level: LevelFilter,
    capacity: usize,
}

impl CaptureLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        CaptureLogger {
            buffer,
            level,
            capacity: LOG_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned buffer only loses log lines.
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(format_log(record));
        }
    }

    fn flush(&self) {}
}

/// Install a [`CaptureLogger`] as the global logger.
///
pub fn init(buffer: LogBuffer, level: LevelFilter) -> Result<(), AppError> {
    let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger::new(buffer, level)));
    log::set_logger(logger)
        .map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
