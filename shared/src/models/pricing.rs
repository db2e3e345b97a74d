//! Pricing tables: workforce hourly rates and paint prices

use serde::{Deserialize, Serialize};

use super::{Audit, Reference, Status};

/// Hourly workforce rate for a workforce type and vehicle category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceRate {
    pub id: i64,
    #[serde(default)]
    pub workforce_type: Option<Reference>,
    #[serde(default)]
    pub vehicle_category: Option<String>,
    /// XOF per hour, transmitted as a string
    #[serde(deserialize_with = "crate::util::amount")]
    pub hourly_rate: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create workforce rate payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceRateCreate {
    pub workforce_type_id: i64,
    pub vehicle_category: Option<String>,
    pub hourly_rate: String,
}

/// Update workforce rate payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkforceRateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workforce_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<String>,
}

/// Paint price per paint type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintPrice {
    pub id: i64,
    #[serde(default)]
    pub paint_type: Option<Reference>,
    /// XOF per hour of painting labour
    #[serde(deserialize_with = "crate::util::amount")]
    pub hourly_rate: String,
    /// XOF per unit of paint product
    #[serde(deserialize_with = "crate::util::amount")]
    pub product_price: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create paint price payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintPriceCreate {
    pub paint_type_id: i64,
    pub hourly_rate: String,
    pub product_price: String,
}

/// Update paint price payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintPriceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price: Option<String>,
}

crate::impl_record!(WorkforceRate, PaintPrice);
