/// Read-only account context shared by every provider in a run.
///
/// Carries no authentication logic of its own: the embedder resolves
/// credentials (profile, environment, instance role) and hands the result
/// over. Shared across all concurrent tasks via `Arc`, never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct Session {
    profile: String,
    account_id: Option<String>,
    default_region: Option<String>,
}

impl Session {
    pub fn new(profile: impl Into<String>) -> Self {
        Session {
            profile: profile.into(),
            account_id: None,
            default_region: None,
        }
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = Some(region.into());
        self
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn default_region(&self) -> Option<&str> {
        self.default_region.as_deref()
    }
}
