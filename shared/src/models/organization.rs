//! Organization Model
//!
//! Insurers and repairers share the same shape on the API side.

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Insurer or repairer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create organization payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationCreate {
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<String>,
}

/// Update organization payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

crate::impl_record!(Organization);
