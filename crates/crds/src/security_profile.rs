//! SecurityProfile CRD
//!
//! Cluster-scoped security posture: how violations are handled and which
//! capabilities workloads may request.

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
    kind = "SecurityProfile",
    status = "SecurityProfileStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct SecurityProfileSpec {
    /// How violations of the profile are handled
    #[serde(default)]
    pub enforcement: EnforcementMode,

    /// Capabilities workloads under this profile may request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EnforcementMode {
    /// Violating workloads are rejected
    #[default]
    Enforce,

    /// Violations are recorded but admitted
    Audit,

    /// The profile is not evaluated
    Disabled,
}

impl FromStr for EnforcementMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "enforce" => Ok(EnforcementMode::Enforce),
            "audit" => Ok(EnforcementMode::Audit),
            "disabled" => Ok(EnforcementMode::Disabled),
            other => Err(format!("unknown enforcement mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecurityProfileStatus {
    /// Number of nodes the profile is active on
    #[serde(default)]
    pub enforced_nodes: i32,

    /// Last reconciliation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reconciled: Option<DateTime<Utc>>,
}

impl ResourceKind for SecurityProfile {
    const KIND_LABEL: &'static str = "securityprofile";
    const NAMESPACED: bool = false;

    fn api(client: Client, _namespace: Option<&str>) -> Api<Self> {
        Api::all(client)
    }

    fn with_identity(name: &str, _namespace: Option<&str>) -> Self {
        SecurityProfile::new(name, SecurityProfileSpec::default())
    }
}
