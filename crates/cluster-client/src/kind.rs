//! Per-kind capability surface
//!
//! Each supported resource kind implements [`ResourceKind`] next to its
//! type definition. The trait carries everything the generic client and
//! builder layers need: the label used in messages, the scope, a typed
//! `Api` accessor, and an identity-only constructor.

use kube::{Api, Client, Resource};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Capability set a resource kind supplies to the generic layers.
pub trait ResourceKind:
    Resource<DynamicType = ()>
    + Clone
    + std::fmt::Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Lower-case label used in user-facing messages (e.g. "backup").
    const KIND_LABEL: &'static str;

    /// Whether objects of this kind live inside a namespace.
    const NAMESPACED: bool;

    /// Typed API handle for this kind, scoped to `namespace` when given.
    ///
    /// Cluster-scoped kinds ignore the namespace argument; namespaced
    /// kinds fall back to a cluster-wide handle when it is `None`, which
    /// is only valid for list queries.
    fn api(client: Client, namespace: Option<&str>) -> Api<Self>;

    /// A default-spec definition carrying the raw identity fields.
    ///
    /// The identity is stored verbatim, valid or not, so later operations
    /// can still report it in their errors.
    fn with_identity(name: &str, namespace: Option<&str>) -> Self;
}
