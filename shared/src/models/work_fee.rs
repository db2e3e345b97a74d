//! Work fee Model

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Flat fee billed for an expertise task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkFee {
    pub id: i64,
    pub code: String,
    pub label: String,
    /// Amount in XOF, transmitted as a string
    #[serde(deserialize_with = "crate::util::amount")]
    pub amount: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create work fee payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkFeeCreate {
    pub code: String,
    pub label: String,
    pub amount: String,
    pub description: Option<String>,
}

/// Update work fee payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkFeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::impl_record!(WorkFee);
