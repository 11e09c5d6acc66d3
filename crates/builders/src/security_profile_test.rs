//! Unit tests for the cluster-scoped SecurityProfile builder surface.

use crds::EnforcementMode;
use kube::Resource;

use crate::security_profile::{
    SecurityProfileBuilder, list_security_profiles, pull_security_profile,
};
use crate::test_utils::*;

fn valid_test_builder(api_client: &cluster_client::ApiClient) -> SecurityProfileBuilder {
    SecurityProfileBuilder::new(Some(api_client), "profile-test-name")
}

#[test]
fn test_new_builder_validation() {
    // no namespace argument and no namespace check for cluster-scoped kinds
    let builder = valid_test_builder(&empty_test_client());
    assert_eq!(builder.error_msg(), None);
    assert_eq!(builder.definition.meta().namespace, None);

    let builder = SecurityProfileBuilder::new(Some(&empty_test_client()), "");
    assert_eq!(builder.error_msg(), Some("securityprofile name cannot be an empty string"));
}

#[test]
fn test_with_enforcement() {
    let testcases = [
        ("enforce", None),
        ("audit", None),
        ("disabled", None),
        (
            "dry-run",
            Some("securityprofile enforcement must be one of: enforce, audit, disabled"),
        ),
    ];

    for (mode, expected) in testcases {
        let builder = valid_test_builder(&empty_test_client()).with_enforcement(mode);
        assert_eq!(builder.error_msg(), expected);
    }

    let builder = valid_test_builder(&empty_test_client()).with_enforcement("audit");
    assert_eq!(builder.definition.spec.enforcement, EnforcementMode::Audit);
}

#[test]
fn test_with_allowed_capability() {
    let builder = valid_test_builder(&empty_test_client())
        .with_allowed_capability("NET_ADMIN")
        .with_allowed_capability("SYS_TIME");
    assert_eq!(builder.error_msg(), None);
    assert_eq!(builder.definition.spec.allowed_capabilities.len(), 2);

    let builder = valid_test_builder(&empty_test_client()).with_allowed_capability("");
    assert_eq!(
        builder.error_msg(),
        Some("securityprofile allowed capability cannot be an empty string")
    );
}

#[tokio::test]
async fn test_pull_security_profile() {
    let client = seeded_test_client(&[dummy_security_profile("profile-test-name")]);

    let builder = pull_security_profile(Some(&client), "profile-test-name")
        .await
        .expect("pull failed");
    assert!(builder.object.is_some());

    // cluster-scoped message has no namespace clause
    let err = pull_security_profile(Some(&client), "missing-profile")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "securityprofile object missing-profile does not exist");

    let err = pull_security_profile(Some(&client), "").await.unwrap_err();
    assert_eq!(err.to_string(), "securityprofile name cannot be empty");
}

#[tokio::test]
async fn test_lifecycle() {
    let client = empty_test_client();
    let mut builder = valid_test_builder(&client).with_enforcement("audit");

    assert!(!builder.exists().await);
    builder.create().await.expect("create failed");
    assert!(builder.exists().await);

    builder.definition.spec.allowed_capabilities = vec!["NET_ADMIN".to_string()];
    builder.update().await.expect("update failed");
    assert_eq!(
        builder.object.as_ref().map(|object| object.spec.allowed_capabilities.clone()),
        Some(vec!["NET_ADMIN".to_string()])
    );

    builder.delete().await.expect("delete failed");
    assert!(builder.object.is_none());

    let profiles = list_security_profiles(Some(&client), Vec::new())
        .await
        .expect("list failed");
    assert!(profiles.is_empty());
}
