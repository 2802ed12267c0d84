
use crate::contracts::audit_result::AuditResult;
use crate::services::report::ReportSink;
use std::io::Write;
use std::sync::Mutex;

/// Human-readable run summary: totals plus the explicit list of which
/// services and regions failed and why.
pub struct SummaryReportSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> SummaryReportSink<W> {
    pub fn new(writer: W) -> Self {
        SummaryReportSink {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> ReportSink for SummaryReportSink<W> {
    fn name(&self) -> &str {
        "summary"
    }

    fn write(&self, result: &AuditResult) -> anyhow::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        writeln!(writer, "Audit summary")?;
        writeln!(writer, "  Regions audited: {}", result.regions.len())?;
        writeln!(writer, "  Global services audited: {}", result.global_services.len())?;
        writeln!(writer, "  Total resources found: {}", result.total_record_count())?;

        let failures = result.failures();
        if failures.is_empty() {
            writeln!(writer, "  No failures")?;
        } else {
            writeln!(writer, "  Failures ({}):", failures.len())?;
            for (unit, message) in failures {
                writeln!(writer, "    {}: {}", unit, message)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
