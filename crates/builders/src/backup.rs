//! Backup builder
//!
//! Typed builder for the `Backup` kind: chained configuration of what the
//! backup covers and where it lands, plus the shared lifecycle.

use cluster_client::{ApiClient, ListParams};
use crds::Backup;

use crate::builder::{self, Builder};
use crate::error::BuilderError;
use crate::validate::nonempty;

/// Builder for `Backup` resources
pub type BackupBuilder = Builder<Backup>;

impl BackupBuilder {
    /// Creates a backup builder with the given identity.
    ///
    /// Always returns a builder; invalid identity fields are recorded as
    /// the sticky validation error instead of being rejected up front.
    pub fn new(api_client: Option<&ApiClient>, name: &str, namespace: &str) -> Self {
        Self::namespaced(api_client, name, namespace)
    }

    /// Sets the storage location the backup is written to.
    pub fn with_storage_location(self, location: &str) -> Self {
        self.with_validated(nonempty(location, "backup storage location"), |definition, location| {
            definition.spec.storage_location = Some(location);
        })
    }

    /// Appends a namespace to those included in the backup.
    pub fn with_included_namespace(self, namespace: &str) -> Self {
        self.with_validated(nonempty(namespace, "backup included namespace"), |definition, namespace| {
            definition.spec.included_namespaces.push(namespace);
        })
    }

    /// Appends a cluster-scoped resource type to those included in the backup.
    pub fn with_included_cluster_scoped_resource(self, resource: &str) -> Self {
        self.with_validated(
            nonempty(resource, "backup included cluster-scoped resource"),
            |definition, resource| {
                definition.spec.included_cluster_scoped_resources.push(resource);
            },
        )
    }

    /// Appends a namespace-scoped resource type to those included in the backup.
    pub fn with_included_namespace_scoped_resource(self, resource: &str) -> Self {
        self.with_validated(
            nonempty(resource, "backup included namespace-scoped resource"),
            |definition, resource| {
                definition.spec.included_namespace_scoped_resources.push(resource);
            },
        )
    }

    /// Appends a cluster-scoped resource type to those excluded from the backup.
    pub fn with_excluded_cluster_scoped_resource(self, resource: &str) -> Self {
        self.with_validated(
            nonempty(resource, "backup excluded cluster-scoped resource"),
            |definition, resource| {
                definition.spec.excluded_cluster_scoped_resources.push(resource);
            },
        )
    }

    /// Appends a namespace-scoped resource type to those excluded from the backup.
    pub fn with_excluded_namespace_scoped_resource(self, resource: &str) -> Self {
        self.with_validated(
            nonempty(resource, "backup excluded namespace-scoped resource"),
            |definition, resource| {
                definition.spec.excluded_namespace_scoped_resources.push(resource);
            },
        )
    }
}

/// Retrieves an existing backup from the cluster into a builder.
pub async fn pull_backup(
    api_client: Option<&ApiClient>,
    name: &str,
    namespace: &str,
) -> Result<BackupBuilder, BuilderError> {
    builder::pull(api_client, name, Some(namespace)).await
}

/// Returns builders for every backup on the cluster, scoped by at most
/// one set of list options.
pub async fn list_backups(
    api_client: Option<&ApiClient>,
    options: Vec<ListParams>,
) -> Result<Vec<BackupBuilder>, BuilderError> {
    builder::list(api_client, options).await
}
