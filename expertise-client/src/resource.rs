//! Resource descriptors
//!
//! Each REST resource is a zero-sized marker type tying together its base
//! path, entity type and Create/Update payloads.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::*;

use crate::endpoints;

/// A REST resource exposed by the back-office API
pub trait Resource: Send + Sync + 'static {
    type Entity: Record + DeserializeOwned + Serialize;
    type Create: Serialize + Send + Sync + std::fmt::Debug;
    type Update: Serialize + Send + Sync + std::fmt::Debug + Default;

    /// Base path relative to the API URL
    const PATH: &'static str;

    /// Whether `{path}/{id}/enable` and `{path}/{id}/disable` exist
    const TOGGLEABLE: bool = false;
}

/// Expertise dossiers
pub struct Assignments;

impl Resource for Assignments {
    type Entity = Assignment;
    type Create = AssignmentCreate;
    type Update = AssignmentUpdate;
    const PATH: &'static str = endpoints::ASSIGNMENTS;
    const TOGGLEABLE: bool = true;
}

pub struct Vehicles;

impl Resource for Vehicles {
    type Entity = Vehicle;
    type Create = VehicleCreate;
    type Update = VehicleUpdate;
    const PATH: &'static str = endpoints::VEHICLES;
}

pub struct Brands;

impl Resource for Brands {
    type Entity = ReferenceItem;
    type Create = ReferenceItemCreate;
    type Update = ReferenceItemUpdate;
    const PATH: &'static str = endpoints::BRANDS;
    const TOGGLEABLE: bool = true;
}

pub struct VehicleModels;

impl Resource for VehicleModels {
    type Entity = VehicleModel;
    type Create = VehicleModelCreate;
    type Update = VehicleModelUpdate;
    const PATH: &'static str = endpoints::VEHICLE_MODELS;
    const TOGGLEABLE: bool = true;
}

pub struct Colors;

impl Resource for Colors {
    type Entity = ReferenceItem;
    type Create = ReferenceItemCreate;
    type Update = ReferenceItemUpdate;
    const PATH: &'static str = endpoints::COLORS;
    const TOGGLEABLE: bool = true;
}

pub struct Clients;

impl Resource for Clients {
    type Entity = Client;
    type Create = ClientCreate;
    type Update = ClientUpdate;
    const PATH: &'static str = endpoints::CLIENTS;
}

pub struct Insurers;

impl Resource for Insurers {
    type Entity = Organization;
    type Create = OrganizationCreate;
    type Update = OrganizationUpdate;
    const PATH: &'static str = endpoints::INSURERS;
    const TOGGLEABLE: bool = true;
}

pub struct Repairers;

impl Resource for Repairers {
    type Entity = Organization;
    type Create = OrganizationCreate;
    type Update = OrganizationUpdate;
    const PATH: &'static str = endpoints::REPAIRERS;
    const TOGGLEABLE: bool = true;
}

pub struct Banks;

impl Resource for Banks {
    type Entity = Bank;
    type Create = BankCreate;
    type Update = BankUpdate;
    const PATH: &'static str = endpoints::BANKS;
    const TOGGLEABLE: bool = true;
}

/// Workforce hourly rates
pub struct WorkforceRates;

impl Resource for WorkforceRates {
    type Entity = WorkforceRate;
    type Create = WorkforceRateCreate;
    type Update = WorkforceRateUpdate;
    const PATH: &'static str = endpoints::WORKFORCE_RATES;
}

pub struct PaintPrices;

impl Resource for PaintPrices {
    type Entity = PaintPrice;
    type Create = PaintPriceCreate;
    type Update = PaintPriceUpdate;
    const PATH: &'static str = endpoints::PAINT_PRICES;
}

/// Status reference table
pub struct Statuses;

impl Resource for Statuses {
    type Entity = ReferenceItem;
    type Create = ReferenceItemCreate;
    type Update = ReferenceItemUpdate;
    const PATH: &'static str = endpoints::STATUSES;
}

pub struct Deadlines;

impl Resource for Deadlines {
    type Entity = Deadline;
    type Create = DeadlineCreate;
    type Update = DeadlineUpdate;
    const PATH: &'static str = endpoints::DEADLINES;
    const TOGGLEABLE: bool = true;
}

pub struct VehicleAges;

impl Resource for VehicleAges {
    type Entity = VehicleAge;
    type Create = VehicleAgeCreate;
    type Update = VehicleAgeUpdate;
    const PATH: &'static str = endpoints::VEHICLE_AGES;
    const TOGGLEABLE: bool = true;
}

pub struct WorkFees;

impl Resource for WorkFees {
    type Entity = WorkFee;
    type Create = WorkFeeCreate;
    type Update = WorkFeeUpdate;
    const PATH: &'static str = endpoints::WORK_FEES;
    const TOGGLEABLE: bool = true;
}

/// Documents transmitted with a dossier
pub struct DocumentTransmitteds;

impl Resource for DocumentTransmitteds {
    type Entity = ReferenceItem;
    type Create = ReferenceItemCreate;
    type Update = ReferenceItemUpdate;
    const PATH: &'static str = endpoints::DOCUMENT_TRANSMITTEDS;
    const TOGGLEABLE: bool = true;
}
