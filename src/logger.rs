//! Custom logging module.
//!
//! This module provides a logger that captures log entries into a bounded
//! buffer the UI shows in its log pane.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Specify how many log lines are kept for display.
///
const MAX_ENTRIES: usize = 200;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared, bounded list of formatted log lines.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return the newest `count` entries, oldest first.
    ///
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(count);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Logger that captures records to a [`LogBuffer`].
///
pub struct CustomLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, buffer: LogBuffer) -> Self {
        CustomLogger { level, buffer }
    }

    /// Install as the global logger.
    ///
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::default();
        for i in 0..(MAX_ENTRIES + 5) {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), MAX_ENTRIES);
        assert_eq!(buffer.tail(1), vec![format!("line {}", MAX_ENTRIES + 4)]);
        assert_eq!(buffer.tail(MAX_ENTRIES * 2)[0], "line 5");
    }

    #[test]
    fn test_logger_filters_by_level() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(LevelFilter::Info, buffer.clone());
        logger.log(
            &Record::builder()
                .args(format_args!("request failed"))
                .level(Level::Error)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("noisy detail"))
                .level(Level::Debug)
                .build(),
        );
        let entries = buffer.tail(10);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("ERROR request failed"));
    }
}
