//! Cluster client errors

use thiserror::Error;

/// Errors that can occur when talking to the resource store
#[derive(Debug, Error)]
pub enum ClientError {
    /// Error reported by the Kubernetes API server
    #[error(transparent)]
    Kube(#[from] kube::Error),

    /// Object not found in the store
    #[error("{0}")]
    NotFound(String),

    /// Create attempted for an object that already exists
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Operation on a kind the scheme does not know about
    #[error("kind {0} is not registered in the scheme")]
    KindNotRegistered(String),

    /// JSON serialization/deserialization error in the fake store
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Selector syntax the fake store cannot evaluate
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
}

impl ClientError {
    /// Whether this error means the object does not exist.
    ///
    /// Recognises both the fake store's not-found variant and a 404 from
    /// the real API server.
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::NotFound(_) => true,
            ClientError::Kube(kube::Error::Api(response)) => response.code == 404,
            _ => false,
        }
    }
}
