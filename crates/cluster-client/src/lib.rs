//! FleetOps cluster client
//!
//! A single connection handle over the Kubernetes API with a swappable
//! in-memory fake for unit tests. Builders hold an [`ApiClient`] and call
//! its generic operations; test code constructs the same handle around a
//! [`FakeClient`] pre-seeded with objects, so both paths share one type.
//!
//! # Example
//!
//! ```no_run
//! use cluster_client::ApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Wrap a connected kube client
//! let client = ApiClient::new(kube::Client::try_default().await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Generic operations**: get/create/update/delete/list over any kind
//!   implementing [`ResourceKind`]
//! - **Fake store**: insertion-ordered in-memory objects for verification
//! - **Scheme registry**: explicit init-once registration of served kinds
//! - **Selector matching**: equality-based label selectors in fake lists

pub mod client;
pub mod error;
pub mod fake;
pub mod kind;
pub mod scheme;
mod selector;

pub use client::ApiClient;
pub use error::ClientError;
pub use fake::FakeClient;
pub use kind::ResourceKind;
pub use scheme::Scheme;

pub use kube::api::ListParams;
