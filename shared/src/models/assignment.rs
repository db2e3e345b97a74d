//! Assignment Model
//!
//! An assignment is an expertise dossier: a vehicle of a client, sent by an
//! insurer, optionally repaired by a repairer. Valuation fields
//! (`market_value`, `depreciation_rate`, `new_vehicle_price`) are computed by
//! the backend and only displayed or overridden here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Audit, Reference, Status};

/// Assignment (expertise dossier) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub reference: String,
    #[serde(default)]
    pub client: Option<Reference>,
    #[serde(default)]
    pub vehicle: Option<Reference>,
    #[serde(default)]
    pub insurer: Option<Reference>,
    #[serde(default)]
    pub repairer: Option<Reference>,
    #[serde(default)]
    pub assignment_type: Option<Reference>,
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub claim_number: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub expertise_date: Option<String>,
    #[serde(default, deserialize_with = "crate::util::amount_opt")]
    pub new_vehicle_price: Option<String>,
    #[serde(default, deserialize_with = "crate::util::amount_opt")]
    pub market_value: Option<String>,
    /// Percentage, e.g. `"35.00"`
    #[serde(default, deserialize_with = "crate::util::amount_opt")]
    pub depreciation_rate: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create assignment payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCreate {
    pub client_id: i64,
    pub vehicle_id: i64,
    pub insurer_id: Option<i64>,
    pub repairer_id: Option<i64>,
    pub assignment_type_id: Option<i64>,
    pub policy_number: Option<String>,
    pub claim_number: Option<String>,
    pub received_at: NaiveDate,
    pub expertise_date: Option<NaiveDate>,
    pub new_vehicle_price: Option<String>,
}

/// Update assignment payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repairer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_vehicle_price: Option<String>,
    /// Manual override of the server-computed market value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_value: Option<String>,
}

crate::impl_record!(Assignment);
