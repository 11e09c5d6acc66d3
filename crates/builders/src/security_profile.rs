//! SecurityProfile builder
//!
//! Typed builder for the cluster-scoped `SecurityProfile` kind. No
//! namespace argument anywhere on this surface.

use cluster_client::{ApiClient, ListParams};
use crds::{EnforcementMode, SecurityProfile};

use crate::builder::{self, Builder};
use crate::error::BuilderError;
use crate::validate::nonempty;

/// Builder for `SecurityProfile` resources
pub type SecurityProfileBuilder = Builder<SecurityProfile>;

impl SecurityProfileBuilder {
    /// Creates a security profile builder with the given name.
    pub fn new(api_client: Option<&ApiClient>, name: &str) -> Self {
        Self::cluster_scoped(api_client, name)
    }

    /// Sets how violations of the profile are handled.
    pub fn with_enforcement(self, mode: &str) -> Self {
        let mode = mode.parse::<EnforcementMode>().map_err(|_| {
            "securityprofile enforcement must be one of: enforce, audit, disabled".to_string()
        });

        self.with_validated(mode, |definition, mode| {
            definition.spec.enforcement = mode;
        })
    }

    /// Appends a capability workloads under this profile may request.
    pub fn with_allowed_capability(self, capability: &str) -> Self {
        self.with_validated(
            nonempty(capability, "securityprofile allowed capability"),
            |definition, capability| {
                definition.spec.allowed_capabilities.push(capability);
            },
        )
    }
}

/// Retrieves an existing security profile from the cluster into a builder.
pub async fn pull_security_profile(
    api_client: Option<&ApiClient>,
    name: &str,
) -> Result<SecurityProfileBuilder, BuilderError> {
    builder::pull(api_client, name, None).await
}

/// Returns builders for every security profile on the cluster, scoped by
/// at most one set of list options.
pub async fn list_security_profiles(
    api_client: Option<&ApiClient>,
    options: Vec<ListParams>,
) -> Result<Vec<SecurityProfileBuilder>, BuilderError> {
    builder::list(api_client, options).await
}
