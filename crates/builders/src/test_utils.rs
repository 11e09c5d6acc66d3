//! Test utilities for builder unit tests
//!
//! Helpers for creating dummy objects and fake clients pre-seeded with
//! them. The scheme registers every supported kind once, mirroring how an
//! embedder constructs the Client handle.

use std::collections::BTreeMap;

use cluster_client::{ApiClient, FakeClient, ResourceKind, Scheme};
use crds::{
    Backup, BackupSpec, NodePool, NodePoolSpec, SecurityProfile, SecurityProfileSpec,
};

/// Scheme with every supported kind registered.
pub fn test_scheme() -> Scheme {
    Scheme::new()
        .register::<Backup>()
        .register::<NodePool>()
        .register::<SecurityProfile>()
}

/// Fake client with an empty store.
pub fn empty_test_client() -> ApiClient {
    ApiClient::fake(FakeClient::new(test_scheme()))
}

/// Fake client pre-seeded with the given objects.
pub fn seeded_test_client<K: ResourceKind>(objects: &[K]) -> ApiClient {
    let fake = FakeClient::new(test_scheme());

    for object in objects {
        fake.add_object(object).expect("failed to seed fake client");
    }

    ApiClient::fake(fake)
}

/// Dummy Backup with the given identity.
pub fn dummy_backup(name: &str, namespace: &str) -> Backup {
    let mut backup = Backup::new(name, BackupSpec::default());
    backup.metadata.namespace = Some(namespace.to_string());
    backup
}

/// Dummy Backup carrying the given labels.
pub fn labeled_backup(name: &str, namespace: &str, labels: &[(&str, &str)]) -> Backup {
    let mut backup = dummy_backup(name, namespace);
    backup.metadata.labels = Some(
        labels
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<BTreeMap<_, _>>(),
    );
    backup
}

/// Fake client holding one Backup named backup-test-name in
/// backup-test-namespace.
pub fn client_with_dummy_backup() -> ApiClient {
    seeded_test_client(&[dummy_backup("backup-test-name", "backup-test-namespace")])
}

/// Dummy NodePool with the given identity.
pub fn dummy_node_pool(name: &str, namespace: &str) -> NodePool {
    let mut pool = NodePool::new(name, NodePoolSpec::default());
    pool.metadata.namespace = Some(namespace.to_string());
    pool
}

/// Dummy SecurityProfile with the given name.
pub fn dummy_security_profile(name: &str) -> SecurityProfile {
    SecurityProfile::new(name, SecurityProfileSpec::default())
}
