//! Backup CRD
//!
//! Declares a backup of cluster state to a named storage location, with
//! include/exclude filters for namespaces and resource types.

use chrono::{DateTime, Utc};
use cluster_client::ResourceKind;
use kube::{Api, Client, CustomResource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "fleetops.io",
    version = "v1alpha1",
    kind = "Backup",
    namespaced,
    status = "BackupStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct BackupSpec {
    /// Storage location the backup is written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,

    /// Namespaces whose contents are included in the backup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,

    /// Cluster-scoped resource types included in the backup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_cluster_scoped_resources: Vec<String>,

    /// Namespace-scoped resource types included in the backup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespace_scoped_resources: Vec<String>,

    /// Cluster-scoped resource types excluded from the backup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_cluster_scoped_resources: Vec<String>,

    /// Namespace-scoped resource types excluded from the backup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespace_scoped_resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum BackupPhase {
    /// Backup accepted but not yet started
    #[default]
    Pending,

    /// Backup currently running
    InProgress,

    /// Backup finished successfully
    Completed,

    /// Backup finished with errors
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct BackupStatus {
    /// Current phase of the backup
    #[serde(default)]
    pub phase: BackupPhase,

    /// When the backup started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the backup completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ResourceKind for Backup {
    const KIND_LABEL: &'static str = "backup";
    const NAMESPACED: bool = true;

    fn api(client: Client, namespace: Option<&str>) -> Api<Self> {
        match namespace {
            Some(namespace) => Api::namespaced(client, namespace),
            None => Api::all(client),
        }
    }

    fn with_identity(name: &str, namespace: Option<&str>) -> Self {
        let mut backup = Backup::new(name, BackupSpec::default());
        backup.metadata.namespace = namespace.map(str::to_string);
        backup
    }
}
