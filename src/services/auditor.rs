
use crate::contracts::audit_request::AuditRequest;
use crate::contracts::audit_result::{AuditResult, RegionOutcome};
use crate::contracts::resource_set::ServiceOutcome;
use crate::services::progress::{NullProgressSink, ProgressSink};
use crate::services::registry::ServiceRegistry;
use crate::services::session::Session;
use futures::StreamExt;
use log::warn;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Precondition failures that abort a run before any audit work starts.
/// Everything that happens after that point is converted to data inside the
/// result tree instead.
#[derive(Debug)]
pub enum AuditError {
    UnknownService(String),
    NoRegions,
}

impl Display for AuditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::UnknownService(service) => {
                write!(f, "Unknown service requested: {}", service)
            }
            AuditError::NoRegions => write!(f, "No regions to audit"),
        }
    }
}

impl Error for AuditError {}

/// The audit orchestrator: owns the bounded region fan-out and the shared
/// result tree for one run.
///
/// Global services run once, sequentially, in the registry's deterministic
/// order. Regions run as spawned tasks, at most
/// [`AuditRequest::effective_pool_size`] in flight, and are merged into the
/// tree in completion order under a single mutex. Partial failures never
/// propagate out of `run`; only precondition failures do.
#[derive(Clone)]
pub struct Auditor {
    session: Arc<Session>,
    registry: Arc<ServiceRegistry>,
    progress: Arc<dyn ProgressSink>,
}

impl Auditor {
    pub fn new(session: Arc<Session>, registry: Arc<ServiceRegistry>) -> Self {
        Auditor {
            session,
            registry,
            progress: Arc::new(NullProgressSink),
        }
    }

    pub fn with_progress_sink(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Runs the full audit and returns the frozen result tree.
    pub async fn run(&self, request: &AuditRequest) -> Result<AuditResult, AuditError> {
        self.registry.validate(request)?;
        if request.regions().is_empty() {
            return Err(AuditError::NoRegions);
        }

        self.progress.publish(&format!(
            "Auditing {} regions: {}",
            request.regions().len(),
            request.regions().join(", ")
        ));
        self.progress
            .publish(&format!("Services to audit: {}", request.services().join(", ")));

        let result = Mutex::new(AuditResult::new());

        self.audit_global_services(request, &result).await;

        let regional_services = Arc::new(self.registry.regional_services(request));
        let total_regions = request.regions().len();
        let mut completed_regions = 0usize;

        let mut region_tasks = futures::stream::iter(request.regions().iter().cloned().map(|region| {
            let auditor = self.clone();
            let services = regional_services.clone();
            async move {
                let task_region = region.clone();
                let handle = tokio::spawn(async move {
                    auditor.audit_region(&task_region, &services).await
                });
                (region, handle.await)
            }
        }))
        .buffer_unordered(request.effective_pool_size());

        while let Some((region, joined)) = region_tasks.next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    warn!(region = region.as_str(); "Region task aborted: {}", join_error);
                    RegionOutcome::failed(join_error.to_string())
                }
            };

            completed_regions += 1;
            let summary = Self::region_summary(&region, &outcome);

            let mut guard = result.lock().await;
            guard.regions.insert(region, outcome);
            drop(guard);

            self.progress.publish(&summary);
            self.progress.publish(&format!(
                "Progress: {}/{} regions processed",
                completed_regions, total_regions
            ));
        }

        Ok(result.into_inner())
    }

    /// Runs every requested region-independent service exactly once. Same
    /// isolation discipline as a region task: one service failing is recorded
    /// and the step moves on.
    async fn audit_global_services(&self, request: &AuditRequest, result: &Mutex<AuditResult>) {
        for service in self.registry.global_services(request) {
            self.progress
                .publish(&format!("Auditing {} resources...", service));
            let outcome = self.audit_service(&service, None).await;

            let mut guard = result.lock().await;
            guard.global_services.insert(service, outcome);
        }
    }

    /// Audits every requested regional service for one region, in request
    /// order, isolating failures per service. Only an abort outside this
    /// method (task panic) can fail the region as a whole.
    async fn audit_region(&self, region: &str, services: &[String]) -> RegionOutcome {
        self.progress.publish(&format!("Auditing region: {}", region));

        let mut outcomes = BTreeMap::new();
        for service in services {
            let outcome = self.audit_service(service, Some(region)).await;
            outcomes.insert(service.clone(), outcome);
        }
        RegionOutcome::Services(outcomes)
    }

    /// One provider invocation: construct, audit, convert any error into an
    /// outcome attributed to the service.
    async fn audit_service(&self, service: &str, region: Option<&str>) -> ServiceOutcome {
        let factory = match self.registry.factory(service) {
            Some(factory) => factory,
            // Unreachable after validate, kept as data rather than a panic
            None => return ServiceOutcome::error(format!("Service {} is not registered", service)),
        };

        let provider = match factory.create(&self.session, region) {
            Ok(provider) => provider,
            Err(error) => {
                warn!(service = service, region = region.unwrap_or("global");
                    "Provider construction failed: {}", error);
                return ServiceOutcome::error(error.to_string());
            }
        };

        match provider.audit().await {
            Ok(resources) => ServiceOutcome::Resources(resources),
            Err(error) => {
                warn!(service = service, region = region.unwrap_or("global");
                    "Audit call failed: {}", error);
                ServiceOutcome::error(error.to_string())
            }
        }
    }

    fn region_summary(region: &str, outcome: &RegionOutcome) -> String {
        match outcome {
            RegionOutcome::Failed { error } => {
                format!("Region {} failed: {}", region, error)
            }
            RegionOutcome::Services(_) => {
                let mut lines = vec![format!("Resources found in {}:", region)];
                for (service, count) in outcome.resource_counts() {
                    match count {
                        Some(count) => lines.push(format!("    {}: {}", service, count)),
                        None => lines.push(format!("    {}: error", service)),
                    }
                }
                lines.join("\n")
            }
        }
    }
}
