
/// Upper bound on concurrently running region tasks when the caller does not
/// specify one.
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 10;

/// Immutable description of one audit run: which regions, which services, and
/// how wide the region fan-out may go.
///
/// Regions are deduplicated preserving first-occurrence order; services keep
/// the caller's order, which is also the order they run in within each
/// region. Service names are validated against the registry by the auditor
/// before any work starts.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    regions: Vec<String>,
    services: Vec<String>,
    concurrency_limit: usize,
}

impl AuditRequest {
    pub fn new<R, S>(regions: R, services: S) -> Self
    where
        R: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        let mut deduplicated: Vec<String> = Vec::new();
        for region in regions {
            if !deduplicated.contains(&region) {
                deduplicated.push(region);
            }
        }
        AuditRequest {
            regions: deduplicated,
            services: services.into_iter().collect(),
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
        }
    }

    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit.max(1);
        self
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// Pool size for the regional fan-out: never wider than the number of
    /// regions.
    pub fn effective_pool_size(&self) -> usize {
        self.concurrency_limit.min(self.regions.len()).max(1)
    }
}
