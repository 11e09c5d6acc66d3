//! Unified API client handle
//!
//! [`ApiClient`] is the single connection handle builders keep a reference
//! to. The inner transport is either a real `kube::Client` or the
//! in-memory [`FakeClient`], so production and test code paths share one
//! concrete type. The handle is cheap to clone and may be shared across
//! any number of builders.

use std::fmt;

use kube::Resource;
use kube::api::{DeleteParams, ListParams, PostParams};
use tracing::debug;

use crate::error::ClientError;
use crate::fake::FakeClient;
use crate::kind::ResourceKind;

/// Shared handle to the resource store
#[derive(Clone)]
pub struct ApiClient {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Kube(kube::Client),
    Fake(FakeClient),
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Kube(_) => f.write_str("ApiClient(kube)"),
            Inner::Fake(_) => f.write_str("ApiClient(fake)"),
        }
    }
}

impl ApiClient {
    /// Wraps a connected Kubernetes client.
    pub fn new(client: kube::Client) -> Self {
        Self {
            inner: Inner::Kube(client),
        }
    }

    /// Wraps an in-memory fake client (for test setup).
    pub fn fake(client: FakeClient) -> Self {
        Self {
            inner: Inner::Fake(client),
        }
    }

    /// Fetches the object of kind `K` with the given identity.
    pub async fn get<K: ResourceKind>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<K, ClientError> {
        debug!("Getting {} {}", K::KIND_LABEL, name);

        match &self.inner {
            Inner::Kube(client) => Ok(K::api(client.clone(), namespace).get(name).await?),
            Inner::Fake(fake) => fake.get(name, namespace),
        }
    }

    /// Creates the object described by `definition`, returning the stored form.
    pub async fn create<K: ResourceKind>(&self, definition: &K) -> Result<K, ClientError> {
        let namespace = definition.meta().namespace.clone();
        debug!(
            "Creating {} {}",
            K::KIND_LABEL,
            definition.meta().name.as_deref().unwrap_or_default()
        );

        match &self.inner {
            Inner::Kube(client) => Ok(K::api(client.clone(), namespace.as_deref())
                .create(&PostParams::default(), definition)
                .await?),
            Inner::Fake(fake) => fake.create(definition),
        }
    }

    /// Replaces the stored object with `definition`, returning the stored form.
    pub async fn update<K: ResourceKind>(&self, definition: &K) -> Result<K, ClientError> {
        let namespace = definition.meta().namespace.clone();
        let name = definition.meta().name.clone().unwrap_or_default();
        debug!("Updating {} {}", K::KIND_LABEL, name);

        match &self.inner {
            Inner::Kube(client) => Ok(K::api(client.clone(), namespace.as_deref())
                .replace(&name, &PostParams::default(), definition)
                .await?),
            Inner::Fake(fake) => fake.update(definition),
        }
    }

    /// Deletes the object of kind `K` with the given identity.
    pub async fn delete<K: ResourceKind>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<(), ClientError> {
        debug!("Deleting {} {}", K::KIND_LABEL, name);

        match &self.inner {
            Inner::Kube(client) => {
                K::api(client.clone(), namespace)
                    .delete(name, &DeleteParams::default())
                    .await?;
                Ok(())
            }
            Inner::Fake(fake) => fake.delete::<K>(name, namespace),
        }
    }

    /// Lists all objects of kind `K` matching `params`, in store order.
    pub async fn list<K: ResourceKind>(&self, params: &ListParams) -> Result<Vec<K>, ClientError> {
        debug!("Listing {}s", K::KIND_LABEL);

        match &self.inner {
            Inner::Kube(client) => Ok(K::api(client.clone(), None).list(params).await?.items),
            Inner::Fake(fake) => fake.list(params),
        }
    }
}
