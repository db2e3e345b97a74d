//! Reference data Model
//!
//! Code/label tables: statuses, brands, colors, transmitted documents.

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Generic code/label entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: i64,
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create reference payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItemCreate {
    pub code: String,
    pub label: String,
    pub description: Option<String>,
}

/// Update reference payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::impl_record!(ReferenceItem);
