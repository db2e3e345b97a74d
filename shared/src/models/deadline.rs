//! Deadline Model

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Processing deadline applied to a dossier step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deadline {
    pub id: i64,
    pub code: String,
    pub label: String,
    /// Allowed duration in days
    pub duration_days: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create deadline payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineCreate {
    pub code: String,
    pub label: String,
    pub duration_days: i32,
    pub description: Option<String>,
}

/// Update deadline payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeadlineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::impl_record!(Deadline);
