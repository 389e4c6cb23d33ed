//! Logger trait definition

use std::sync::Arc;

/// Sink for log lines emitted by semkit components
///
/// Implementations:
/// - `FileLogger`: the process-wide debug log file
/// - host adapters (editor output channel, `tracing`, ...)
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}

/// Logger shared between components
pub type SharedLogger = Arc<dyn Logger>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        lines: Mutex<Vec<String>>,
    }

    impl Logger for Recording {
        fn debug(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("debug {}", message));
        }
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("info {}", message));
        }
        fn warn(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("warn {}", message));
        }
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("error {}", message));
        }
    }

    #[test]
    fn test_shared_logger_is_object_safe() {
        let recording = Arc::new(Recording::default());
        let shared: SharedLogger = recording.clone();

        shared.info("loaded");
        shared.error("failed");

        let lines = recording.lines.lock().unwrap();
        assert_eq!(*lines, vec!["info loaded".to_string(), "error failed".to_string()]);
    }
}
