use crate::contracts::resource_set::ResourceSet;
use crate::services::providers::{ProviderFactory, ResourceProvider};
use crate::services::session::Session;
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Provider that returns a fixed resource set on every call.
pub struct StaticProvider {
    resources: ResourceSet,
}

#[async_trait]
impl ResourceProvider for StaticProvider {
    async fn audit(&self) -> anyhow::Result<ResourceSet> {
        Ok(self.resources.clone())
    }
}

/// Factory producing [`StaticProvider`]s with the same fixed resource set for
/// every `(session, region)` pair.
pub struct StaticFactory {
    resources: ResourceSet,
}

impl StaticFactory {
    pub fn new(resources: ResourceSet) -> Self {
        StaticFactory { resources }
    }
}

impl ProviderFactory for StaticFactory {
    fn create(
        &self,
        _session: &Session,
        _region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>> {
        Ok(Box::new(StaticProvider {
            resources: self.resources.clone(),
        }))
    }
}

/// Factory returning a different fixed resource set per region. Regions
/// without an entry (and the global pseudo-region) get an empty flat set.
pub struct PerRegionFactory {
    by_region: HashMap<String, ResourceSet>,
}

impl PerRegionFactory {
    pub fn new(by_region: HashMap<String, ResourceSet>) -> Self {
        PerRegionFactory { by_region }
    }
}

impl ProviderFactory for PerRegionFactory {
    fn create(
        &self,
        _session: &Session,
        region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>> {
        let resources = region
            .and_then(|region| self.by_region.get(region).cloned())
            .unwrap_or_else(ResourceSet::empty);
        Ok(Box::new(StaticProvider { resources }))
    }
}

/// Provider whose audit call always fails with the given message.
pub struct FailingProvider {
    message: String,
}

#[async_trait]
impl ResourceProvider for FailingProvider {
    async fn audit(&self) -> anyhow::Result<ResourceSet> {
        bail!("{}", self.message)
    }
}

/// Factory producing providers that always fail their audit call.
pub struct FailingFactory {
    message: String,
}

impl FailingFactory {
    pub fn new(message: impl Into<String>) -> Self {
        FailingFactory {
            message: message.into(),
        }
    }
}

impl ProviderFactory for FailingFactory {
    fn create(
        &self,
        _session: &Session,
        _region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>> {
        Ok(Box::new(FailingProvider {
            message: self.message.clone(),
        }))
    }
}

/// Factory whose construction itself fails, for exercising the
/// provider-construction error path.
pub struct BrokenFactory {
    message: String,
}

impl BrokenFactory {
    pub fn new(message: impl Into<String>) -> Self {
        BrokenFactory {
            message: message.into(),
        }
    }
}

impl ProviderFactory for BrokenFactory {
    fn create(
        &self,
        _session: &Session,
        _region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>> {
        bail!("{}", self.message)
    }
}

/// Provider that panics inside the audit call, aborting the whole region
/// task. Used to exercise the orchestrator's region-level failure boundary.
pub struct PanickingProvider {
    message: String,
}

#[async_trait]
impl ResourceProvider for PanickingProvider {
    async fn audit(&self) -> anyhow::Result<ResourceSet> {
        panic!("{}", self.message);
    }
}

/// Factory producing [`PanickingProvider`]s for selected regions and empty
/// static providers everywhere else.
pub struct PanickingFactory {
    message: String,
    regions: Vec<String>,
}

impl PanickingFactory {
    pub fn new(message: impl Into<String>, regions: Vec<String>) -> Self {
        PanickingFactory {
            message: message.into(),
            regions,
        }
    }
}

impl ProviderFactory for PanickingFactory {
    fn create(
        &self,
        _session: &Session,
        region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>> {
        match region {
            Some(region) if self.regions.iter().any(|r| r == region) => {
                Ok(Box::new(PanickingProvider {
                    message: self.message.clone(),
                }))
            }
            _ => Ok(Box::new(StaticProvider {
                resources: ResourceSet::empty(),
            })),
        }
    }
}

/// Records how many audit calls overlap in time.
///
/// Every audit call bumps the in-flight counter, parks for `hold`, then
/// decrements it, so concurrent entries are observable as a peak greater
/// than one.
pub struct ConcurrencyProbe {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    hold: Duration,
}

impl ConcurrencyProbe {
    pub fn new(hold: Duration) -> Arc<Self> {
        Arc::new(ConcurrencyProbe {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            hold,
        })
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);
        tokio::time::sleep(self.hold).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Provider wired to a shared [`ConcurrencyProbe`].
pub struct ProbeProvider {
    probe: Arc<ConcurrencyProbe>,
}

#[async_trait]
impl ResourceProvider for ProbeProvider {
    async fn audit(&self) -> anyhow::Result<ResourceSet> {
        self.probe.enter().await;
        Ok(ResourceSet::empty())
    }
}

/// Factory producing providers that report into one shared probe.
pub struct ProbeFactory {
    probe: Arc<ConcurrencyProbe>,
}

impl ProbeFactory {
    pub fn new(probe: Arc<ConcurrencyProbe>) -> Self {
        ProbeFactory { probe }
    }
}

impl ProviderFactory for ProbeFactory {
    fn create(
        &self,
        _session: &Session,
        _region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>> {
        Ok(Box::new(ProbeProvider {
            probe: self.probe.clone(),
        }))
    }
}
