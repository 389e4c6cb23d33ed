//! Process-wide debug log file
//!
//! Writes to `<temp dir>/semkit-debug.log` when `SEMKIT_DEBUG` is `1` or
//! `true`. `SEMKIT_LOG_LEVEL` sets the minimum level (default `debug`).
//! Both variables are read once, on first use.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use super::traits::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct FileLoggerState {
    file: Option<File>,
    min_level: LogLevel,
}

impl FileLoggerState {
    fn from_env() -> Self {
        let enabled = std::env::var("SEMKIT_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = std::env::var("SEMKIT_LOG_LEVEL")
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

        // The file is only opened when logging is switched on.
        let file = if enabled {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file_path())
                .ok()
        } else {
            None
        };

        Self { file, min_level }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }
        let Some(file) = self.file.as_mut() else {
            return;
        };

        let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp(), level, module, message);
        let _ = file.flush();
    }
}

/// `HH:MM:SS.mmm` (UTC) of the current wall-clock time
fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                (secs % 86400) / 3600,
                (secs % 3600) / 60,
                secs % 60,
                d.subsec_millis()
            )
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}

static LOGGER: OnceLock<Mutex<FileLoggerState>> = OnceLock::new();

fn state() -> &'static Mutex<FileLoggerState> {
    LOGGER.get_or_init(|| Mutex::new(FileLoggerState::from_env()))
}

/// Log a message at the given level
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Ok(mut logger) = state().lock() {
        logger.write(level, module, message);
    }
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Debug line tagged with the calling module path
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::debug(module_path!(), &format!($($arg)*))
    };
}

/// Warning line tagged with the calling module path
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::warn(module_path!(), &format!($($arg)*))
    };
}

/// [`Logger`] that writes into the debug log file under a fixed module tag
///
/// Lets components that take a [`SharedLogger`](super::SharedLogger) share
/// the process-wide file. Silent unless `SEMKIT_DEBUG` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogger {
    module: String,
}

impl FileLogger {
    pub fn new(module: impl Into<String>) -> Self {
        Self { module: module.into() }
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}

impl Logger for FileLogger {
    fn debug(&self, message: &str) {
        debug(&self.module, message);
    }

    fn info(&self, message: &str) {
        info(&self.module, message);
    }

    fn warn(&self, message: &str) {
        warn(&self.module, message);
    }

    fn error(&self, message: &str) {
        error(&self.module, message);
    }
}

/// Location of the debug log file
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("semkit-debug.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels_are_ordered() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_logging_does_not_panic() {
        debug("test", "debug message");
        info("test", "info message");
        warn("test", "warn message");
        error("test", "error message");
        crate::debug_log!("formatted {}", 42);
    }

    #[test]
    fn test_file_logger_as_shared_logger() {
        let logger: crate::logging::SharedLogger = std::sync::Arc::new(FileLogger::new("semkit_core::skills"));
        logger.info("imported");
        logger.warn("replaced");
        assert_eq!(FileLogger::new("semkit_core::skills").module(), "semkit_core::skills");
    }

    #[test]
    fn test_log_file_lives_in_temp_dir() {
        let path = log_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().unwrap(), "semkit-debug.log");
    }
}
