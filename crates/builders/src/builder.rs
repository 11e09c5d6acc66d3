//! Generic resource builder
//!
//! One builder per resource kind pairs an intended definition with the
//! last-observed remote object and a sticky, first-wins validation error.
//! Configuration happens through the chained `with_*` methods on the
//! per-kind modules; only the shared lifecycle operations here talk to
//! the cluster, and every one of them consults the error slot before the
//! client.

use cluster_client::{ApiClient, ListParams, ResourceKind};
use kube::Resource;
use tracing::debug;

use crate::error::BuilderError;

/// Stateful wrapper around one resource of kind `K`.
///
/// Holds the intended definition, the last-observed remote object (`None`
/// until fetched), an optional shared client handle, and the accumulated
/// validation error. A builder with no client can still be constructed
/// and report its own validation state; it just cannot reach the cluster.
#[derive(Clone, Debug)]
pub struct Builder<K: ResourceKind> {
    api_client: Option<ApiClient>,
    /// Intended definition of the resource
    pub definition: K,
    /// Last-observed remote object, `None` until fetched or after delete
    pub object: Option<K>,
    error_msg: Option<String>,
}

impl<K: ResourceKind> Builder<K> {
    /// Builder for a namespaced kind, validating both identity fields.
    pub(crate) fn namespaced(api_client: Option<&ApiClient>, name: &str, namespace: &str) -> Self {
        debug!(
            "Initializing new {} builder with name {} in namespace {}",
            K::KIND_LABEL,
            name,
            namespace
        );

        let mut builder = Self::bare(api_client, name, Some(namespace));

        if name.is_empty() {
            builder.error_msg = Some(format!("{} name cannot be an empty string", K::KIND_LABEL));
            return builder;
        }

        if namespace.is_empty() {
            builder.error_msg = Some(format!(
                "{} namespace cannot be an empty string",
                K::KIND_LABEL
            ));
        }

        builder
    }

    /// Builder for a cluster-scoped kind, validating the name only.
    pub(crate) fn cluster_scoped(api_client: Option<&ApiClient>, name: &str) -> Self {
        debug!("Initializing new {} builder with name {}", K::KIND_LABEL, name);

        let mut builder = Self::bare(api_client, name, None);

        if name.is_empty() {
            builder.error_msg = Some(format!("{} name cannot be an empty string", K::KIND_LABEL));
        }

        builder
    }

    /// Identity is stored verbatim even when invalid, so later operations
    /// can still report it.
    fn bare(api_client: Option<&ApiClient>, name: &str, namespace: Option<&str>) -> Self {
        Self {
            api_client: api_client.cloned(),
            definition: K::with_identity(name, namespace),
            object: None,
            error_msg: None,
        }
    }

    /// Sticky validation message, if any.
    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    /// Runs a setter: no-op once poisoned, otherwise records the first
    /// failure or applies the accepted value to the definition.
    pub(crate) fn with_validated<T>(
        mut self,
        value: Result<T, String>,
        apply: impl FnOnce(&mut K, T),
    ) -> Self {
        if self.error_msg.is_some() {
            return self;
        }

        match value {
            Ok(value) => apply(&mut self.definition, value),
            Err(msg) => self.error_msg = Some(msg),
        }

        self
    }

    fn name(&self) -> String {
        self.definition.meta().name.clone().unwrap_or_default()
    }

    fn namespace(&self) -> Option<String> {
        self.definition.meta().namespace.clone()
    }

    /// Common pre-check: the sticky error first, then the client handle.
    fn validate(&self, verb: &'static str) -> Result<ApiClient, BuilderError> {
        if let Some(msg) = &self.error_msg {
            return Err(BuilderError::Validation(msg.clone()));
        }

        match &self.api_client {
            Some(client) => Ok(client.clone()),
            None => Err(BuilderError::NilApiClient {
                verb,
                kind: K::KIND_LABEL.to_string(),
            }),
        }
    }

    /// Whether the resource exists on the cluster.
    ///
    /// Refreshes the observed object on success. Existence is a query,
    /// not an action: every failure collapses to `false` and is never
    /// surfaced to the caller.
    // TODO: a transient client error is indistinguishable from absence
    // here, and create/delete gate their writes on this answer.
    pub async fn exists(&mut self) -> bool {
        let Ok(client) = self.validate("get") else {
            return false;
        };

        self.object = client
            .get::<K>(&self.name(), self.namespace().as_deref())
            .await
            .ok();
        self.object.is_some()
    }

    /// Fetches a fresh snapshot of the resource from the cluster.
    ///
    /// Client errors, including not-found, are returned verbatim. The
    /// builder itself is not modified.
    pub async fn get(&self) -> Result<K, BuilderError> {
        let client = self.validate("get")?;

        debug!(
            "Getting {} {} in namespace {:?}",
            K::KIND_LABEL,
            self.name(),
            self.namespace()
        );

        Ok(client
            .get::<K>(&self.name(), self.namespace().as_deref())
            .await?)
    }

    /// Creates the resource on the cluster if it does not already exist.
    ///
    /// Idempotent by check: when the object is already present the write
    /// is skipped and the existing object becomes the observed state.
    pub async fn create(&mut self) -> Result<&mut Self, BuilderError> {
        let client = self.validate("create")?;

        debug!("Creating {} {}", K::KIND_LABEL, self.name());

        if !self.exists().await {
            self.object = Some(client.create(&self.definition).await?);
        }

        Ok(self)
    }

    /// Replaces the remote object with the current definition.
    ///
    /// Existence is re-derived from a fresh check rather than a cached
    /// flag, so a stale snapshot never turns into a misleading error.
    pub async fn update(&mut self) -> Result<&mut Self, BuilderError> {
        let client = self.validate("update")?;

        debug!("Updating {} {}", K::KIND_LABEL, self.name());

        if !self.exists().await {
            return Err(BuilderError::UpdateNonExistent(K::KIND_LABEL));
        }

        self.object = Some(client.update(&self.definition).await?);

        Ok(self)
    }

    /// Deletes the resource from the cluster.
    ///
    /// Deleting an object that does not exist is success; the observed
    /// object is cleared either way.
    pub async fn delete(&mut self) -> Result<&mut Self, BuilderError> {
        let client = self.validate("delete")?;

        debug!("Deleting {} {}", K::KIND_LABEL, self.name());

        if !self.exists().await {
            self.object = None;
            return Ok(self);
        }

        match client
            .delete::<K>(&self.name(), self.namespace().as_deref())
            .await
        {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }

        self.object = None;

        Ok(self)
    }
}

/// Retrieves an existing resource into a builder whose definition and
/// observed object are both the fetched state.
///
/// Identity is validated here, independent of any builder. `namespace`
/// is `None` for cluster-scoped kinds.
pub async fn pull<K: ResourceKind>(
    api_client: Option<&ApiClient>,
    name: &str,
    namespace: Option<&str>,
) -> Result<Builder<K>, BuilderError> {
    debug!("Pulling existing {} {}", K::KIND_LABEL, name);

    let Some(api_client) = api_client else {
        return Err(BuilderError::NilApiClient {
            verb: "pull",
            kind: K::KIND_LABEL.to_string(),
        });
    };

    if name.is_empty() {
        return Err(BuilderError::Validation(format!(
            "{} name cannot be empty",
            K::KIND_LABEL
        )));
    }

    if K::NAMESPACED && namespace.unwrap_or_default().is_empty() {
        return Err(BuilderError::Validation(format!(
            "{} namespace cannot be empty",
            K::KIND_LABEL
        )));
    }

    let mut builder = Builder {
        api_client: Some(api_client.clone()),
        definition: K::with_identity(name, namespace),
        object: None,
        error_msg: None,
    };

    if !builder.exists().await {
        return Err(match namespace {
            Some(namespace) if K::NAMESPACED => BuilderError::ObjectMissing {
                kind: K::KIND_LABEL,
                name: name.to_string(),
                namespace: namespace.to_string(),
            },
            _ => BuilderError::ClusterObjectMissing {
                kind: K::KIND_LABEL,
                name: name.to_string(),
            },
        });
    }

    if let Some(object) = &builder.object {
        builder.definition = object.clone();
    }

    Ok(builder)
}

/// Returns builders for every resource of kind `K`, in store order, each
/// with definition and observed object populated from the stored object.
///
/// At most one [`ListParams`] value may be supplied; zero means default
/// options, and an explicitly-empty selector matches everything.
pub async fn list<K: ResourceKind>(
    api_client: Option<&ApiClient>,
    options: Vec<ListParams>,
) -> Result<Vec<Builder<K>>, BuilderError> {
    let Some(api_client) = api_client else {
        return Err(BuilderError::NilApiClient {
            verb: "list",
            kind: format!("{}s", K::KIND_LABEL),
        });
    };

    if options.len() > 1 {
        return Err(BuilderError::TooManyListOptions);
    }

    let params = options.into_iter().next().unwrap_or_default();

    debug!("Listing all {}s", K::KIND_LABEL);

    let objects = api_client.list::<K>(&params).await?;

    Ok(objects
        .into_iter()
        .map(|object| Builder {
            api_client: Some(api_client.clone()),
            definition: object.clone(),
            object: Some(object),
            error_msg: None,
        })
        .collect())
}
