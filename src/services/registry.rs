
use crate::contracts::audit_request::AuditRequest;
use crate::services::auditor::AuditError;
use crate::services::providers::ProviderFactory;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Region-independent services run once per audit; everything else runs once
/// per region.
pub const GLOBAL_SERVICES: &[&str] = &["route53", "iam", "s3"];

/// The DNS service runs first among globals so progress output starts at a
/// predictable place.
pub const FIRST_GLOBAL_SERVICE: &str = "route53";

/// Service names the registry recognizes out of the box.
pub const KNOWN_SERVICES: &[&str] = &[
    "amplify",
    "athena",
    "autoscaling",
    "bedrock",
    "config",
    "dms",
    "dynamodb",
    "ec2",
    "fsx",
    "glue",
    "iam",
    "kinesis",
    "lambda",
    "lightsail",
    "rds",
    "route53",
    "s3",
    "sns",
    "vpc",
];

/// Whether a service is scoped to a region or to the whole account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceScope {
    Global,
    Regional,
}

impl ServiceScope {
    pub fn of(service: &str) -> ServiceScope {
        if GLOBAL_SERVICES.contains(&service) {
            ServiceScope::Global
        } else {
            ServiceScope::Regional
        }
    }
}

struct ServiceDescriptor {
    scope: ServiceScope,
    factory: Arc<dyn ProviderFactory>,
}

/// Explicit service name to provider-factory mapping.
///
/// Replaces lookup by naming convention: the set of auditable services is
/// fixed when the registry is built and never changes during a run. The
/// auditor resolves every provider through this table.
pub struct ServiceRegistry {
    descriptors: BTreeMap<String, ServiceDescriptor>,
    registration_order: Vec<String>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        ServiceRegistry {
            descriptors: BTreeMap::new(),
            registration_order: Vec::new(),
        }
    }

    /// Registers a factory under `service` with the conventional scope for
    /// that name. Unknown names are accepted and treated as regional, so
    /// embedders can plug in providers the built-in catalog does not list.
    pub fn with_service(self, service: impl Into<String>, factory: Arc<dyn ProviderFactory>) -> Self {
        let service = service.into();
        let scope = ServiceScope::of(&service);
        self.with_scoped_service(service, scope, factory)
    }

    pub fn with_scoped_service(
        mut self,
        service: impl Into<String>,
        scope: ServiceScope,
        factory: Arc<dyn ProviderFactory>,
    ) -> Self {
        let service = service.into();
        if !self.descriptors.contains_key(&service) {
            self.registration_order.push(service.clone());
        }
        self.descriptors
            .insert(service, ServiceDescriptor { scope, factory });
        self
    }

    pub fn contains(&self, service: &str) -> bool {
        self.descriptors.contains_key(service)
    }

    pub fn scope(&self, service: &str) -> Option<ServiceScope> {
        self.descriptors.get(service).map(|d| d.scope)
    }

    pub fn factory(&self, service: &str) -> Option<Arc<dyn ProviderFactory>> {
        self.descriptors.get(service).map(|d| d.factory.clone())
    }

    /// Rejects requests naming services this registry cannot audit. Running
    /// with an unknown service would silently drop it from the result tree,
    /// so this is a precondition failure.
    pub fn validate(&self, request: &AuditRequest) -> Result<(), AuditError> {
        for service in request.services() {
            if !self.contains(service) {
                return Err(AuditError::UnknownService(service.clone()));
            }
        }
        Ok(())
    }

    /// The requested global services in deterministic run order:
    /// [`FIRST_GLOBAL_SERVICE`] first, the rest in registration order.
    pub fn global_services(&self, request: &AuditRequest) -> Vec<String> {
        let mut services: Vec<String> = self
            .registration_order
            .iter()
            .filter(|service| {
                request.services().contains(service)
                    && self.scope(service) == Some(ServiceScope::Global)
            })
            .cloned()
            .collect();
        if let Some(position) = services.iter().position(|s| s == FIRST_GLOBAL_SERVICE) {
            let first = services.remove(position);
            services.insert(0, first);
        }
        services
    }

    /// The requested regional services in request order.
    pub fn regional_services(&self, request: &AuditRequest) -> Vec<String> {
        request
            .services()
            .iter()
            .filter(|service| self.scope(service) == Some(ServiceScope::Regional))
            .cloned()
            .collect()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        ServiceRegistry::new()
    }
}
