pub mod composed_progress_sink;
pub mod console_progress_sink;
pub mod log_progress_sink;

/// Receives free-form human-readable status lines from the auditor.
///
/// Implementations must be safe to call from concurrent region tasks and must
/// serialize their own output so multi-line messages are never torn. Message
/// order across regions is nondeterministic.
pub trait ProgressSink: Send + Sync {
    fn publish(&self, message: &str);
}

/// Drops every message. Useful when the embedder only wants the result tree.
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn publish(&self, _message: &str) {}
}
