pub mod json_report_sink;
pub mod report_dispatcher;
pub mod summary_report_sink;

use crate::contracts::audit_result::AuditResult;

/// Renders the frozen result tree into some output format. Sinks must
/// tolerate error markers in place of any expected resource set and both
/// resource-set shapes.
pub trait ReportSink: Send + Sync {
    /// Short name used to attribute sink failures in logs.
    fn name(&self) -> &str;

    fn write(&self, result: &AuditResult) -> anyhow::Result<()>;
}
