use crate::configuration::models::audit_settings::AuditSettings;
use crate::services::registry::KNOWN_SERVICES;
use std::path::PathBuf;

#[test]
fn minimal_yaml_gets_defaults() {
    let settings = AuditSettings::from_yaml("{}").unwrap();

    assert_eq!(settings.services.len(), KNOWN_SERVICES.len());
    assert!(settings.audits_all_regions());
    assert_eq!(settings.max_workers, 10);
    assert_eq!(settings.output_dir, PathBuf::from("results"));
}

#[test]
fn explicit_values_override_defaults() {
    let settings = AuditSettings::from_yaml(
        r#"
services:
  - ec2
  - iam
regions:
  - us-east-1
  - eu-west-1
max_workers: 4
output_dir: /tmp/inventory
"#,
    )
    .unwrap();

    assert_eq!(settings.services, vec!["ec2".to_string(), "iam".to_string()]);
    assert!(!settings.audits_all_regions());
    assert_eq!(settings.max_workers, 4);
    assert_eq!(settings.output_dir, PathBuf::from("/tmp/inventory"));
}

#[test]
fn to_request_carries_settings_over() {
    let settings = AuditSettings::from_yaml("services: [ec2]\nmax_workers: 3").unwrap();
    let request = settings.to_request(vec!["us-east-1".to_string(), "us-east-1".to_string()]);

    assert_eq!(request.regions(), ["us-east-1".to_string()]);
    assert_eq!(request.services(), ["ec2".to_string()]);
    assert_eq!(request.concurrency_limit(), 3);
}
