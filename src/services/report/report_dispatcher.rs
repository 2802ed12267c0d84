
use crate::contracts::audit_result::AuditResult;
use crate::services::report::ReportSink;
use anyhow::bail;
use log::error;
use std::sync::Arc;

/// Drives every configured report sink over one frozen result tree.
///
/// A failing sink never prevents the remaining sinks from running, and never
/// destroys the computed result: if every sink fails, the raw JSON dump is
/// emitted through the log so the run's data is still obtainable.
pub struct ReportDispatcher {
    sinks: Vec<Arc<dyn ReportSink>>,
}

impl ReportDispatcher {
    pub fn new() -> Self {
        ReportDispatcher { sinks: Vec::new() }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn dispatch(&self, result: &AuditResult) -> anyhow::Result<()> {
        let mut failed = 0usize;
        for sink in &self.sinks {
            if let Err(cause) = sink.write(result) {
                failed += 1;
                error!(sink = sink.name(); "Report sink failed: {}", cause);
            }
        }

        if failed == self.sinks.len() && !self.sinks.is_empty() {
            // Rendering failed everywhere; surface the raw tree so the run
            // is not lost
            match serde_json::to_string_pretty(result) {
                Ok(dump) => error!(log_type = "report"; "Raw audit result:\n{}", dump),
                Err(cause) => error!("Could not serialize raw audit result: {}", cause),
            }
        }

        if failed > 0 {
            bail!("{} of {} report sinks failed", failed, self.sinks.len());
        }
        Ok(())
    }
}

impl Default for ReportDispatcher {
    fn default() -> Self {
        ReportDispatcher::new()
    }
}
