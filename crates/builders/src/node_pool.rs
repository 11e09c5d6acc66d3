//! NodePool builder
//!
//! Typed builder for the `NodePool` kind: replica counts, hardware
//! profile selection, and node labels.

use cluster_client::{ApiClient, ListParams};
use crds::{HardwareProfile, NodePool};

use crate::builder::{self, Builder};
use crate::error::BuilderError;
use crate::validate::nonempty;

/// Builder for `NodePool` resources
pub type NodePoolBuilder = Builder<NodePool>;

impl NodePoolBuilder {
    /// Creates a node pool builder with the given identity.
    pub fn new(api_client: Option<&ApiClient>, name: &str, namespace: &str) -> Self {
        Self::namespaced(api_client, name, namespace)
    }

    /// Sets the hardware profile the pool's nodes are provisioned with.
    pub fn with_hardware_profile(self, profile: &str) -> Self {
        let profile = profile.parse::<HardwareProfile>().map_err(|_| {
            "nodepool hardware profile must be one of: standard, high-memory, gpu".to_string()
        });

        self.with_validated(profile, |definition, profile| {
            definition.spec.hardware_profile = profile;
        })
    }

    /// Sets the desired number of nodes in the pool.
    pub fn with_replicas(self, replicas: i32) -> Self {
        let replicas = if replicas < 0 {
            Err("nodepool replicas cannot be negative".to_string())
        } else {
            Ok(replicas)
        };

        self.with_validated(replicas, |definition, replicas| {
            definition.spec.replicas = replicas;
        })
    }

    /// Adds a label applied to every node in the pool.
    ///
    /// An empty value is legal; an empty key is not.
    pub fn with_node_label(self, key: &str, value: &str) -> Self {
        let value = value.to_string();

        self.with_validated(nonempty(key, "nodepool node label key"), |definition, key| {
            definition.spec.node_labels.insert(key, value);
        })
    }
}

/// Retrieves an existing node pool from the cluster into a builder.
pub async fn pull_node_pool(
    api_client: Option<&ApiClient>,
    name: &str,
    namespace: &str,
) -> Result<NodePoolBuilder, BuilderError> {
    builder::pull(api_client, name, Some(namespace)).await
}

/// Returns builders for every node pool on the cluster, scoped by at
/// most one set of list options.
pub async fn list_node_pools(
    api_client: Option<&ApiClient>,
    options: Vec<ListParams>,
) -> Result<Vec<NodePoolBuilder>, BuilderError> {
    builder::list(api_client, options).await
}
