//! Run and per-channel timing for the daily export
//!
//! `Timer` wraps the whole run (`daylog_run`, `export_day`) and each channel
//! (`export_channel:<id>`); `log_error` records channel-level API failures
//! before they are turned into inline notices in the log document.

use std::time::Instant;

/// Logs the elapsed time of a named export step when dropped
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        tracing::debug!(
            operation = %self.operation,
            duration_ms = self.elapsed_ms(),
            "Export step finished"
        );
    }
}

/// Log a failed Slack call (`channel_info`, `channel_history`) with its error kind
pub fn log_error(operation: &str, error: &impl std::error::Error) {
    tracing::error!(
        operation = %operation,
        error = %error,
        error_kind = std::any::type_name_of_val(error),
        "Slack call failed"
    );
}
