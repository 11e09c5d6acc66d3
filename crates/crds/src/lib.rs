//! FleetOps CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the kinds the resource
//! builders manage, plus their [`cluster_client::ResourceKind`] impls.

pub mod backup;
pub mod node_pool;
pub mod security_profile;

pub use backup::*;
pub use node_pool::*;
pub use security_profile::*;
