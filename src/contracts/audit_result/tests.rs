use crate::contracts::audit_result::{AuditResult, RegionOutcome};
use crate::contracts::resource_set::{ResourceSet, ResourceValue, ServiceOutcome};
use maplit::btreemap;
use serde_json::json;

fn one_record(field: &str, value: &str) -> ResourceSet {
    ResourceSet::Flat(vec![btreemap! {
        field.to_string() => ResourceValue::from(value),
    }])
}

#[test]
fn failed_region_serializes_as_error_object() {
    let mut result = AuditResult::new();
    result
        .regions
        .insert("eu-west-1".to_string(), RegionOutcome::failed("no client"));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["regions"]["eu-west-1"], json!({"error": "no client"}));
}

#[test]
fn failures_lists_every_failed_unit() {
    let mut result = AuditResult::new();
    result
        .global_services
        .insert("iam".to_string(), ServiceOutcome::error("expired token"));
    result.regions.insert(
        "us-east-1".to_string(),
        RegionOutcome::Services(btreemap! {
            "ec2".to_string() => ServiceOutcome::Resources(one_record("InstanceId", "i-1")),
            "rds".to_string() => ServiceOutcome::error("denied"),
        }),
    );
    result
        .regions
        .insert("eu-west-1".to_string(), RegionOutcome::failed("no client"));

    let failures = result.failures();
    assert_eq!(
        failures,
        vec![
            ("global/iam".to_string(), "expired token".to_string()),
            ("eu-west-1".to_string(), "no client".to_string()),
            ("us-east-1/rds".to_string(), "denied".to_string()),
        ]
    );
}

#[test]
fn total_record_count_skips_errored_services() {
    let mut result = AuditResult::new();
    result.global_services.insert(
        "s3".to_string(),
        ServiceOutcome::Resources(one_record("Name", "bucket-1")),
    );
    result.regions.insert(
        "us-east-1".to_string(),
        RegionOutcome::Services(btreemap! {
            "ec2".to_string() => ServiceOutcome::Resources(one_record("InstanceId", "i-1")),
            "rds".to_string() => ServiceOutcome::error("denied"),
        }),
    );

    assert_eq!(result.total_record_count(), 2);
}

#[test]
fn run_id_is_not_serialized() {
    let result = AuditResult::new();
    let value = serde_json::to_value(&result).unwrap();
    assert!(value.get("run_id").is_none());
    assert_eq!(value, json!({"global_services": {}, "regions": {}}));
}
