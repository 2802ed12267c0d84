#[cfg(test)]
mod tests;

use crate::contracts::resource_set::ServiceOutcome;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Everything collected for one region: either a per-service outcome map, or
/// a single error marker when the region task itself failed before producing
/// one. The failed shape serializes as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RegionOutcome {
    Services(BTreeMap<String, ServiceOutcome>),
    Failed { error: String },
}

impl RegionOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        RegionOutcome::Failed {
            error: message.into(),
        }
    }

    pub fn service(&self, service: &str) -> Option<&ServiceOutcome> {
        match self {
            RegionOutcome::Services(services) => services.get(service),
            RegionOutcome::Failed { .. } => None,
        }
    }

    /// Per-service record counts for progress output, in service name order.
    /// Errored services report no count.
    pub fn resource_counts(&self) -> Vec<(&str, Option<usize>)> {
        match self {
            RegionOutcome::Services(services) => services
                .iter()
                .map(|(name, outcome)| (name.as_str(), outcome.record_count()))
                .collect(),
            RegionOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// The shared result tree for one audit run.
///
/// Created empty when the run starts, populated only through the auditor's
/// mutex-guarded merges, and handed out by value (frozen) once every task has
/// completed. The run id names report files; it lives beside the tree so two
/// runs over identical data still compare structurally equal.
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    #[serde(skip)]
    run_id: Uuid,
    pub global_services: BTreeMap<String, ServiceOutcome>,
    pub regions: BTreeMap<String, RegionOutcome>,
}

impl AuditResult {
    pub fn new() -> Self {
        AuditResult {
            run_id: Uuid::new_v4(),
            global_services: BTreeMap::new(),
            regions: BTreeMap::new(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn region(&self, region: &str) -> Option<&RegionOutcome> {
        self.regions.get(region)
    }

    pub fn global_service(&self, service: &str) -> Option<&ServiceOutcome> {
        self.global_services.get(service)
    }

    /// Every failed unit of work as `(unit, message)`, where a unit is either
    /// `"<region>"`, `"<region>/<service>"`, or `"global/<service>"`. This is
    /// the user-visible list of what went wrong in a best-effort run.
    pub fn failures(&self) -> Vec<(String, String)> {
        let mut failures = Vec::new();
        for (service, outcome) in &self.global_services {
            if let ServiceOutcome::Error { error } = outcome {
                failures.push((format!("global/{}", service), error.clone()));
            }
        }
        for (region, outcome) in &self.regions {
            match outcome {
                RegionOutcome::Failed { error } => failures.push((region.clone(), error.clone())),
                RegionOutcome::Services(services) => {
                    for (service, outcome) in services {
                        if let ServiceOutcome::Error { error } = outcome {
                            failures.push((format!("{}/{}", region, service), error.clone()));
                        }
                    }
                }
            }
        }
        failures
    }

    /// Total records found across the whole tree, where determinable.
    pub fn total_record_count(&self) -> usize {
        let global: usize = self
            .global_services
            .values()
            .filter_map(ServiceOutcome::record_count)
            .sum();
        let regional: usize = self
            .regions
            .values()
            .flat_map(|outcome| outcome.resource_counts())
            .filter_map(|(_, count)| count)
            .sum();
        global + regional
    }
}

impl Default for AuditResult {
    fn default() -> Self {
        AuditResult::new()
    }
}
