//! Scheme registry for the fake store
//!
//! The fake client only serves kinds that were registered up front. The
//! registry is plain owned state handed into [`crate::FakeClient::new`];
//! register every kind once at construction time and treat the scheme as
//! immutable afterwards. Nothing here is global.

use std::collections::HashSet;

use kube::Resource;

use crate::kind::ResourceKind;

type GvkKey = (String, String, String);

/// Registry of the group/version/kind triples a fake client can serve.
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    kinds: HashSet<GvkKey>,
}

impl Scheme {
    /// Creates an empty scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `K`, returning the scheme for chaining.
    #[must_use]
    pub fn register<K: ResourceKind>(mut self) -> Self {
        self.kinds.insert(Self::key::<K>());
        self
    }

    /// Whether `K` has been registered.
    pub fn contains<K: ResourceKind>(&self) -> bool {
        self.kinds.contains(&Self::key::<K>())
    }

    fn key<K: ResourceKind>() -> GvkKey {
        (
            K::group(&()).into_owned(),
            K::version(&()).into_owned(),
            K::kind(&()).into_owned(),
        )
    }
}
