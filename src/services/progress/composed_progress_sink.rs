#[cfg(test)]
mod tests;

use crate::services::progress::ProgressSink;
use std::sync::Arc;

/// Fans every progress message out to several sinks, e.g. console output plus
/// structured logs.
pub struct ComposedProgressSink {
    sinks: Vec<Arc<dyn ProgressSink>>,
}

impl ComposedProgressSink {
    pub fn new() -> Self {
        ComposedProgressSink { sinks: Vec::new() }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl ProgressSink for ComposedProgressSink {
    fn publish(&self, message: &str) {
        for sink in &self.sinks {
            sink.publish(message);
        }
    }
}

impl Default for ComposedProgressSink {
    fn default() -> Self {
        ComposedProgressSink::new()
    }
}
