use crate::contracts::resource_set::ResourceSet;
use crate::services::session::Session;
use async_trait::async_trait;

#[async_trait]
/// A capability bound to one service and (for regional services) one region
/// that enumerates that service's resources.
///
/// Implementations are expected to convert their own partial failures into
/// explicit empty or error-tagged collections where feasible, so that some
/// resource kinds being denied does not discard the rest. Returning `Err` is
/// reserved for calls the provider cannot recover from; the auditor converts
/// it into an error outcome attributed to this service.
pub trait ResourceProvider: Send + Sync {
    async fn audit(&self) -> anyhow::Result<ResourceSet>;
}

/// Builds a [`ResourceProvider`] bound to `(session, region)`. Regional
/// factories receive `Some(region)`, global factories `None`. Construction
/// errors propagate; the auditor attributes them to the service being built.
pub trait ProviderFactory: Send + Sync {
    fn create(
        &self,
        session: &Session,
        region: Option<&str>,
    ) -> anyhow::Result<Box<dyn ResourceProvider>>;
}
