//! NodePool CRD
//!
//! Declares a pool of identically-provisioned nodes: how many replicas,
//! what hardware profile they run on, and the labels applied to each node.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use cluster_client::ResourceKind;
use kube::{Api, Client, CustomResource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "fleetops.io",
    version = "v1alpha1",
    kind = "NodePool",
    namespaced,
    status = "NodePoolStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolSpec {
    /// Hardware profile the pool's nodes are provisioned with
    #[serde(default)]
    pub hardware_profile: HardwareProfile,

    /// Desired number of nodes in the pool
    #[serde(default)]
    pub replicas: i32,

    /// Labels applied to every node in the pool
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HardwareProfile {
    /// General-purpose nodes
    #[default]
    Standard,

    /// Memory-optimized nodes
    HighMemory,

    /// GPU-equipped nodes
    Gpu,
}

impl FromStr for HardwareProfile {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "standard" => Ok(HardwareProfile::Standard),
            "high-memory" => Ok(HardwareProfile::HighMemory),
            "gpu" => Ok(HardwareProfile::Gpu),
            other => Err(format!("unknown hardware profile: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolStatus {
    /// Number of nodes currently ready
    #[serde(default)]
    pub ready_replicas: i32,

    /// Last reconciliation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reconciled: Option<DateTime<Utc>>,
}

impl ResourceKind for NodePool {
    const KIND_LABEL: &'static str = "nodepool";
    const NAMESPACED: bool = true;

    fn api(client: Client, namespace: Option<&str>) -> Api<Self> {
        match namespace {
            Some(namespace) => Api::namespaced(client, namespace),
            None => Api::all(client),
        }
    }

    fn with_identity(name: &str, namespace: Option<&str>) -> Self {
        let mut pool = NodePool::new(name, NodePoolSpec::default());
        pool.metadata.namespace = namespace.map(str::to_string);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_profile_parsing() {
        assert_eq!("standard".parse::<HardwareProfile>(), Ok(HardwareProfile::Standard));
        assert_eq!("high-memory".parse::<HardwareProfile>(), Ok(HardwareProfile::HighMemory));
        assert_eq!("gpu".parse::<HardwareProfile>(), Ok(HardwareProfile::Gpu));
        assert!("metal".parse::<HardwareProfile>().is_err());
    }

    #[test]
    fn test_hardware_profile_serializes_kebab_case() {
        let json = serde_json::to_string(&HardwareProfile::HighMemory).unwrap();
        assert_eq!(json, "\"high-memory\"");
    }
}
