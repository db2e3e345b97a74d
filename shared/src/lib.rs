//! Shared types for the expertise back-office
//!
//! Entity models, Create/Update payloads, list filters and the pagination
//! envelope returned by the REST API. Used by both the HTTP client and the
//! admin front-end.

pub mod filters;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use filters::ListFilters;
pub use models::{Audit, Record, Reference, Status, StatusCode, UserRef};
pub use response::{DataEnvelope, PageLinks, PageMeta, Paginated};
