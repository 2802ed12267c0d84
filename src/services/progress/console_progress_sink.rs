use crate::services::progress::ProgressSink;
use std::io::Write;
use std::sync::Mutex;

/// Writes progress lines to stdout, one message at a time. The mutex keeps
/// multi-line messages from interleaving when several region tasks report at
/// once.
pub struct ConsoleProgressSink {
    guard: Mutex<()>,
}

impl ConsoleProgressSink {
    pub fn new() -> Self {
        ConsoleProgressSink { guard: Mutex::new(()) }
    }
}

impl ProgressSink for ConsoleProgressSink {
    fn publish(&self, message: &str) {
        let _held = self.guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", message);
    }
}

impl Default for ConsoleProgressSink {
    fn default() -> Self {
        ConsoleProgressSink::new()
    }
}
