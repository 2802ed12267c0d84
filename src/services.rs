pub mod auditor;
pub mod progress;
pub mod providers;
pub mod registry;
pub mod report;
pub mod session;
