pub mod audit_settings;
