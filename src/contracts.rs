pub mod audit_request;
pub mod audit_result;
pub mod resource_set;
