//! Bank Model

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Bank entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create bank payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankCreate {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Update bank payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::impl_record!(Bank);
