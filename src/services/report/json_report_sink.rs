
use crate::contracts::audit_result::AuditResult;
use crate::services::report::ReportSink;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Writes the raw structured dump of the result tree:
/// `<output_dir>/inventory_<run_id>.json`, pretty-printed.
pub struct JsonReportSink {
    output_dir: PathBuf,
}

impl JsonReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        JsonReportSink {
            output_dir: output_dir.into(),
        }
    }

    pub fn report_path(&self, result: &AuditResult) -> PathBuf {
        self.output_dir
            .join(format!("inventory_{}.json", result.run_id()))
    }
}

impl ReportSink for JsonReportSink {
    fn name(&self) -> &str {
        "json"
    }

    fn write(&self, result: &AuditResult) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Creating output directory {}", self.output_dir.display()))?;
        let path = self.report_path(result);
        let file = File::create(&path)
            .with_context(|| format!("Creating report file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), result)
            .with_context(|| format!("Writing report file {}", path.display()))?;
        log::info!(path:display = path.display(); "JSON report saved");
        Ok(())
    }
}
