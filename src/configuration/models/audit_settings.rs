#[cfg(test)]
mod tests;

use crate::contracts::audit_request::{AuditRequest, DEFAULT_CONCURRENCY_LIMIT};
use crate::services::registry::KNOWN_SERVICES;
use serde::Deserialize;
use std::path::PathBuf;

fn default_services() -> Vec<String> {
    KNOWN_SERVICES.iter().map(|s| s.to_string()).collect()
}

fn default_max_workers() -> usize {
    DEFAULT_CONCURRENCY_LIMIT
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

/// Embedder-facing settings, loadable from YAML.
///
/// An empty region list means "all available regions"; resolving that
/// sentinel needs a live account call, so it happens in the embedder and the
/// core only ever sees the resolved list.
#[derive(Debug, Deserialize)]
pub struct AuditSettings {
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl AuditSettings {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yml::from_str(content)?)
    }

    pub fn audits_all_regions(&self) -> bool {
        self.regions.is_empty()
    }

    /// Builds the validated core input from these settings and the resolved
    /// region list.
    pub fn to_request(&self, resolved_regions: Vec<String>) -> AuditRequest {
        AuditRequest::new(resolved_regions, self.services.clone())
            .with_concurrency_limit(self.max_workers)
    }
}

impl Default for AuditSettings {
    fn default() -> Self {
        AuditSettings {
            services: default_services(),
            regions: Vec::new(),
            max_workers: default_max_workers(),
            output_dir: default_output_dir(),
        }
    }
}
