// Depends on dev-only test tooling, so only compiled with the test harness
#[cfg(test)]
pub mod auditor_context;
pub mod collecting_progress_sink;
pub mod stub_providers;
