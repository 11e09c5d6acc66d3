//! Unit tests for the NodePool setters and the pull/list protocol.

use crds::HardwareProfile;

use crate::node_pool::{NodePoolBuilder, list_node_pools, pull_node_pool};
use crate::test_utils::*;

fn valid_test_builder(api_client: &cluster_client::ApiClient) -> NodePoolBuilder {
    NodePoolBuilder::new(Some(api_client), "pool-test-name", "pool-test-namespace")
}

#[test]
fn test_new_builder_validation() {
    let testcases = [
        ("pool-test-name", "pool-test-namespace", None),
        ("", "pool-test-namespace", Some("nodepool name cannot be an empty string")),
        ("pool-test-name", "", Some("nodepool namespace cannot be an empty string")),
    ];

    for (name, namespace, expected) in testcases {
        let builder = NodePoolBuilder::new(Some(&empty_test_client()), name, namespace);
        assert_eq!(builder.error_msg(), expected);
    }
}

#[test]
fn test_with_hardware_profile() {
    let testcases = [
        ("standard", None),
        ("high-memory", None),
        ("gpu", None),
        (
            "mainframe",
            Some("nodepool hardware profile must be one of: standard, high-memory, gpu"),
        ),
    ];

    for (profile, expected) in testcases {
        let builder = valid_test_builder(&empty_test_client()).with_hardware_profile(profile);
        assert_eq!(builder.error_msg(), expected);
    }

    let builder = valid_test_builder(&empty_test_client()).with_hardware_profile("high-memory");
    assert_eq!(builder.definition.spec.hardware_profile, HardwareProfile::HighMemory);
}

#[test]
fn test_with_replicas() {
    let builder = valid_test_builder(&empty_test_client()).with_replicas(3);
    assert_eq!(builder.error_msg(), None);
    assert_eq!(builder.definition.spec.replicas, 3);

    let builder = valid_test_builder(&empty_test_client()).with_replicas(0);
    assert_eq!(builder.error_msg(), None);

    let builder = valid_test_builder(&empty_test_client()).with_replicas(-1);
    assert_eq!(builder.error_msg(), Some("nodepool replicas cannot be negative"));
    // the definition is untouched on failure
    assert_eq!(builder.definition.spec.replicas, 0);
}

#[test]
fn test_with_node_label() {
    let builder = valid_test_builder(&empty_test_client())
        .with_node_label("role", "worker")
        .with_node_label("pool", "");
    assert_eq!(builder.error_msg(), None);
    assert_eq!(builder.definition.spec.node_labels.len(), 2);
    assert_eq!(builder.definition.spec.node_labels.get("role").map(String::as_str), Some("worker"));

    let builder = valid_test_builder(&empty_test_client()).with_node_label("", "worker");
    assert_eq!(
        builder.error_msg(),
        Some("nodepool node label key cannot be an empty string")
    );
}

#[tokio::test]
async fn test_pull_node_pool() {
    let client = seeded_test_client(&[dummy_node_pool("pool-test-name", "pool-test-namespace")]);

    let builder = pull_node_pool(Some(&client), "pool-test-name", "pool-test-namespace")
        .await
        .expect("pull failed");
    assert!(builder.object.is_some());

    let err = pull_node_pool(Some(&client), "missing-pool", "pool-test-namespace")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "nodepool object missing-pool does not exist in namespace pool-test-namespace"
    );
}

#[tokio::test]
async fn test_list_node_pools_with_nil_client() {
    let err = list_node_pools(None, Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "failed to list nodepools, 'apiClient' parameter is nil");
}

#[tokio::test]
async fn test_lifecycle_round_trip() {
    let client = empty_test_client();
    let mut builder = valid_test_builder(&client)
        .with_hardware_profile("gpu")
        .with_replicas(5)
        .with_node_label("role", "inference");

    builder.create().await.expect("create failed");

    let fetched = builder.get().await.expect("get failed");
    assert_eq!(fetched.spec.hardware_profile, HardwareProfile::Gpu);
    assert_eq!(fetched.spec.replicas, 5);
}
