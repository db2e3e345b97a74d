//! Vehicle Model
//!
//! Vehicles reference a brand, a model and a color. Models belong to a brand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Audit, Reference, Status};

/// Vehicle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub license_plate: String,
    #[serde(default)]
    pub brand: Option<Reference>,
    #[serde(default)]
    pub vehicle_model: Option<Reference>,
    #[serde(default)]
    pub color: Option<Reference>,
    #[serde(default)]
    pub mileage: Option<i64>,
    #[serde(default)]
    pub first_entry_into_circulation_date: Option<String>,
    #[serde(default)]
    pub chassis_number: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create vehicle payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleCreate {
    pub license_plate: String,
    pub brand_id: i64,
    pub vehicle_model_id: i64,
    pub color_id: Option<i64>,
    pub mileage: Option<i64>,
    pub first_entry_into_circulation_date: Option<NaiveDate>,
    pub chassis_number: Option<String>,
}

/// Update vehicle payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_entry_into_circulation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis_number: Option<String>,
}

/// Vehicle model entity (e.g. "Corolla" for brand "Toyota")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: i64,
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub brand: Option<Reference>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create vehicle model payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModelCreate {
    pub code: String,
    pub label: String,
    pub brand_id: i64,
    pub description: Option<String>,
}

/// Update vehicle model payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleModelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::impl_record!(Vehicle, VehicleModel);
