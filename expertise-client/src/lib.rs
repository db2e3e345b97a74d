//! Expertise Client - HTTP client for the back-office REST API
//!
//! Provides the transport ([`HttpClient`]), its configuration and error
//! types, the endpoint map and a typed CRUD wrapper per resource
//! ([`ResourceApi`]).

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod resource;

pub use api::ResourceApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use resource::*;

// Re-export shared types for convenience
pub use shared::{ListFilters, PageMeta, Paginated};
