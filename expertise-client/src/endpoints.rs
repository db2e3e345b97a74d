//! Endpoint map
//!
//! Base paths of every resource, relative to the configured API URL.

pub const ASSIGNMENTS: &str = "assignments";
pub const VEHICLES: &str = "vehicles";
pub const BRANDS: &str = "brands";
pub const VEHICLE_MODELS: &str = "vehicle-models";
pub const COLORS: &str = "colors";
pub const CLIENTS: &str = "clients";
pub const INSURERS: &str = "insurers";
pub const REPAIRERS: &str = "repairers";
pub const BANKS: &str = "banks";
pub const WORKFORCE_RATES: &str = "workforce-rates";
pub const PAINT_PRICES: &str = "paint-prices";
pub const STATUSES: &str = "statuses";
pub const DEADLINES: &str = "deadlines";
pub const VEHICLE_AGES: &str = "vehicle-ages";
pub const WORK_FEES: &str = "work-fees";
pub const DOCUMENT_TRANSMITTEDS: &str = "document-transmitteds";

/// `{base}/{id}`
pub fn item(base: &str, id: i64) -> String {
    format!("{}/{}", base, id)
}

/// `{base}/{id}/enable` or `{base}/{id}/disable`
pub fn toggle(base: &str, id: i64, enable: bool) -> String {
    let action = if enable { "enable" } else { "disable" };
    format!("{}/{}/{}", base, id, action)
}
