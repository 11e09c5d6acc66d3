//! In-memory fake client for unit testing
//!
//! Stores objects as type-erased JSON keyed by group/version/kind plus
//! identity, so tests can pre-seed a store and exercise code paths without
//! a running cluster. Only kinds registered in the [`Scheme`] handed to
//! [`FakeClient::new`] are served; everything else errors the way an
//! unregistered type would against a real decoder.
//!
//! Objects are kept in insertion order so list results are deterministic.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kube::Resource;
use kube::api::ListParams;

use crate::error::ClientError;
use crate::kind::ResourceKind;
use crate::scheme::Scheme;
use crate::selector;

/// Fake resource store for testing
#[derive(Debug, Clone, Default)]
pub struct FakeClient {
    scheme: Scheme,
    store: Arc<Mutex<Vec<StoredObject>>>,
}

/// One stored object, type-erased for heterogeneous storage
#[derive(Debug, Clone)]
struct StoredObject {
    gvk: (String, String, String),
    namespace: Option<String>,
    name: String,
    labels: BTreeMap<String, String>,
    data: serde_json::Value,
}

impl StoredObject {
    fn encode<K: ResourceKind>(object: &K) -> Result<Self, ClientError> {
        Ok(Self {
            gvk: gvk_of::<K>(),
            namespace: object.meta().namespace.clone(),
            name: object.meta().name.clone().unwrap_or_default(),
            labels: object.meta().labels.clone().unwrap_or_default(),
            data: serde_json::to_value(object)?,
        })
    }

    fn decode<K: ResourceKind>(&self) -> Result<K, ClientError> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    fn matches_identity(&self, gvk: &(String, String, String), name: &str, namespace: Option<&str>) -> bool {
        self.gvk == *gvk && self.name == name && self.namespace.as_deref() == namespace
    }
}

impl FakeClient {
    /// Creates a fake client serving the kinds registered in `scheme`.
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            store: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seeds the store with an object (for test setup).
    ///
    /// Replaces any existing object with the same identity.
    pub fn add_object<K: ResourceKind>(&self, object: &K) -> Result<(), ClientError> {
        self.check_registered::<K>()?;

        let entry = StoredObject::encode(object)?;
        let mut store = self.lock();

        if let Some(existing) = store
            .iter_mut()
            .find(|stored| stored.matches_identity(&entry.gvk, &entry.name, entry.namespace.as_deref()))
        {
            *existing = entry;
        } else {
            store.push(entry);
        }

        Ok(())
    }

    pub(crate) fn get<K: ResourceKind>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<K, ClientError> {
        self.check_registered::<K>()?;

        let gvk = gvk_of::<K>();
        let store = self.lock();

        store
            .iter()
            .find(|stored| stored.matches_identity(&gvk, name, namespace))
            .ok_or_else(|| not_found::<K>(name))?
            .decode()
    }

    pub(crate) fn create<K: ResourceKind>(&self, definition: &K) -> Result<K, ClientError> {
        self.check_registered::<K>()?;

        let entry = StoredObject::encode(definition)?;
        let mut store = self.lock();

        if store
            .iter()
            .any(|stored| stored.matches_identity(&entry.gvk, &entry.name, entry.namespace.as_deref()))
        {
            return Err(ClientError::AlreadyExists(qualified_name::<K>(&entry.name)));
        }

        let created = entry.decode();
        store.push(entry);
        created
    }

    pub(crate) fn update<K: ResourceKind>(&self, definition: &K) -> Result<K, ClientError> {
        self.check_registered::<K>()?;

        let entry = StoredObject::encode(definition)?;
        let mut store = self.lock();

        let Some(existing) = store
            .iter_mut()
            .find(|stored| stored.matches_identity(&entry.gvk, &entry.name, entry.namespace.as_deref()))
        else {
            return Err(not_found::<K>(&entry.name));
        };

        *existing = entry;
        existing.decode()
    }

    pub(crate) fn delete<K: ResourceKind>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<(), ClientError> {
        self.check_registered::<K>()?;

        let gvk = gvk_of::<K>();
        let mut store = self.lock();

        let Some(position) = store
            .iter()
            .position(|stored| stored.matches_identity(&gvk, name, namespace))
        else {
            return Err(not_found::<K>(name));
        };

        store.remove(position);
        Ok(())
    }

    pub(crate) fn list<K: ResourceKind>(&self, params: &ListParams) -> Result<Vec<K>, ClientError> {
        self.check_registered::<K>()?;

        if let Some(field_selector) = &params.field_selector {
            return Err(ClientError::UnsupportedSelector(format!(
                "field selector {:?} is not supported by the fake client",
                field_selector
            )));
        }

        let requirements = selector::parse(params.label_selector.as_deref().unwrap_or_default())?;

        let gvk = gvk_of::<K>();
        let store = self.lock();

        store
            .iter()
            .filter(|stored| stored.gvk == gvk && selector::matches(&requirements, &stored.labels))
            .map(StoredObject::decode)
            .collect()
    }

    fn check_registered<K: ResourceKind>(&self) -> Result<(), ClientError> {
        if self.scheme.contains::<K>() {
            Ok(())
        } else {
            Err(ClientError::KindNotRegistered(K::kind(&()).into_owned()))
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StoredObject>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn gvk_of<K: ResourceKind>() -> (String, String, String) {
    (
        K::group(&()).into_owned(),
        K::version(&()).into_owned(),
        K::kind(&()).into_owned(),
    )
}

fn qualified_name<K: ResourceKind>(name: &str) -> String {
    format!("{}.{} \"{}\"", K::plural(&()), K::group(&()), name)
}

/// Not-found error with the API server's message shape.
fn not_found<K: ResourceKind>(name: &str) -> ClientError {
    ClientError::NotFound(format!("{} not found", qualified_name::<K>(name)))
}
