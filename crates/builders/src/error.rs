//! Builder errors
//!
//! Three categories, never conflated: sticky configuration errors carried
//! as plain text, precondition failures with fixed-format messages, and
//! remote errors propagated from the client untouched.

use cluster_client::ClientError;
use thiserror::Error;

/// Errors returned by builder lifecycle and list operations
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Sticky configuration error accumulated on the builder
    #[error("{0}")]
    Validation(String),

    /// Lifecycle operation attempted without a client handle
    #[error("failed to {verb} {kind}, 'apiClient' parameter is nil")]
    NilApiClient {
        /// Operation that was attempted
        verb: &'static str,
        /// Kind label, pluralized for list operations
        kind: String,
    },

    /// Update attempted against an object that does not exist
    #[error("cannot update non-existent {0}")]
    UpdateNonExistent(&'static str),

    /// Pull attempted against a namespaced object that does not exist
    #[error("{kind} object {name} does not exist in namespace {namespace}")]
    ObjectMissing {
        /// Kind label
        kind: &'static str,
        /// Object name
        name: String,
        /// Object namespace
        namespace: String,
    },

    /// Pull attempted against a cluster-scoped object that does not exist
    #[error("{kind} object {name} does not exist")]
    ClusterObjectMissing {
        /// Kind label
        kind: &'static str,
        /// Object name
        name: String,
    },

    /// More than one ListOptions value was supplied
    #[error("error: more than one ListOptions was passed")]
    TooManyListOptions,

    /// Error propagated from the resource store
    #[error(transparent)]
    Client(#[from] ClientError),
}
