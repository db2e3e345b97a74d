//! Vehicle age Model

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Vehicle age bracket used by depreciation tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleAge {
    pub id: i64,
    /// Age in months
    pub value: i32,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create vehicle age payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAgeCreate {
    pub value: i32,
    pub label: String,
    pub description: Option<String>,
}

/// Update vehicle age payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleAgeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::impl_record!(VehicleAge);
