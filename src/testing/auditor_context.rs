use crate::services::auditor::Auditor;
use crate::services::registry::ServiceRegistry;
use crate::services::session::Session;
use crate::testing::collecting_progress_sink::CollectingProgressSink;
use std::sync::Arc;
use test_context::AsyncTestContext;

/// Ready-made session plus a collecting progress sink for auditor tests.
pub struct AuditorContext {
    pub session: Arc<Session>,
    pub progress: Arc<CollectingProgressSink>,
}

impl AuditorContext {
    /// Builds an auditor over the given registry, wired to this context's
    /// session and progress sink.
    pub fn auditor(&self, registry: ServiceRegistry) -> Auditor {
        Auditor::new(self.session.clone(), Arc::new(registry))
            .with_progress_sink(self.progress.clone())
    }
}

impl AsyncTestContext for AuditorContext {
    async fn setup() -> Self {
        AuditorContext {
            session: Arc::new(Session::new("test").with_account_id("000000000000")),
            progress: Arc::new(CollectingProgressSink::new()),
        }
    }
}
