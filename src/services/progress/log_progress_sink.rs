use crate::services::progress::ProgressSink;

/// Emits progress through the `log` facade as structured records. The logger
/// backend serializes concurrent records, so no extra locking is needed here.
pub struct LogProgressSink;

impl LogProgressSink {
    pub fn new() -> Self {
        LogProgressSink {}
    }
}

impl ProgressSink for LogProgressSink {
    fn publish(&self, message: &str) {
        log::info!(
            // Indicates audit progress events for easier filtering in log aggregation systems
            log_type = "progress";

            // The log message
            "{}", message);
    }
}

impl Default for LogProgressSink {
    fn default() -> Self {
        LogProgressSink::new()
    }
}
