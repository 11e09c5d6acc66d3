//! FleetOps resource builders
//!
//! A typed convenience layer over the cluster API: each supported kind
//! gets a builder that wraps a resource definition, validates it, and
//! exposes a uniform lifecycle (exists, get, create, update, delete),
//! plus free `pull_*` and `list_*` functions.
//!
//! Validation errors stick to the builder: the first failure wins, later
//! `with_*` calls become no-ops, and every lifecycle operation reports
//! the recorded message without touching the cluster.
//!
//! # Example
//!
//! ```no_run
//! use builders::BackupBuilder;
//! use cluster_client::ApiClient;
//!
//! # async fn example(client: ApiClient) -> Result<(), builders::BuilderError> {
//! let mut backup = BackupBuilder::new(Some(&client), "nightly", "fleet-system")
//!     .with_storage_location("default")
//!     .with_included_namespace("workloads");
//!
//! backup.create().await?;
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod builder;
pub mod error;
pub mod node_pool;
pub mod security_profile;
mod validate;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod node_pool_test;
#[cfg(test)]
mod security_profile_test;

pub use backup::{BackupBuilder, list_backups, pull_backup};
pub use builder::{Builder, list, pull};
pub use error::BuilderError;
pub use node_pool::{NodePoolBuilder, list_node_pools, pull_node_pool};
pub use security_profile::{SecurityProfileBuilder, list_security_profiles, pull_security_profile};
