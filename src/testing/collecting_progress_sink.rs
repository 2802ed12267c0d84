use crate::services::progress::ProgressSink;
use std::sync::Mutex;

/// Captures every published message so tests can assert on progress output.
pub struct CollectingProgressSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingProgressSink {
    pub fn new() -> Self {
        CollectingProgressSink {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ProgressSink for CollectingProgressSink {
    fn publish(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_owned());
    }
}

impl Default for CollectingProgressSink {
    fn default() -> Self {
        CollectingProgressSink::new()
    }
}
