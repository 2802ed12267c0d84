#![cfg_attr(coverage, feature(coverage_attribute))]

pub mod configuration;
pub mod contracts;
pub mod services;
// COVERAGE: disabled since the module only ships provider stubs for tests
#[cfg_attr(coverage, coverage(off))]
pub mod testing;
