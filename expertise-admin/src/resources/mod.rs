//! Per-resource screen definitions
//!
//! Each resource declares its table columns, its detail view and its form.
//! Resources sharing an entity (insurers and repairers, the reference
//! lists) share the form type.

mod assignment;
mod bank;
mod client;
mod deadline;
mod organization;
mod pricing;
mod reference;
mod vehicle;
mod vehicle_age;
mod work_fee;

pub use assignment::AssignmentForm;
pub use bank::BankForm;
pub use client::ClientForm;
pub use deadline::DeadlineForm;
pub use organization::OrganizationForm;
pub use pricing::{PaintPriceForm, WorkforceRateForm};
pub use reference::ReferenceForm;
pub use vehicle::{VehicleForm, VehicleModelForm, quick_create_brand, quick_create_color, quick_create_model};
pub use vehicle_age::VehicleAgeForm;
pub use work_fee::WorkFeeForm;

use clap::ValueEnum;
use expertise_client::Resource;

use crate::ui::{Column, DataTable, ResourceForm};

/// A resource with a back-office screen
pub trait AdminResource: Resource + Sized {
    type Form: ResourceForm<Self>;

    /// Page title (plural)
    const TITLE: &'static str;

    /// Used in dialog titles and toasts
    const SINGULAR: &'static str;

    const EMPTY_TEXT: &'static str = crate::ui::table::DEFAULT_EMPTY_TEXT;

    fn columns() -> Vec<Column<Self::Entity>>;

    /// Label/value pairs of the detail view, audit excluded
    fn view_fields(entity: &Self::Entity) -> Vec<(&'static str, String)>;

    /// Short label used in confirmations
    fn row_label(entity: &Self::Entity) -> String;

    fn table() -> DataTable<Self::Entity> {
        DataTable::new(Self::columns(), Self::TOGGLEABLE).with_empty_text(Self::EMPTY_TEXT)
    }
}

/// Resource selector for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Assignments,
    Vehicles,
    Brands,
    VehicleModels,
    Colors,
    Clients,
    Insurers,
    Repairers,
    Banks,
    WorkforceRates,
    PaintPrices,
    Statuses,
    Deadlines,
    VehicleAges,
    WorkFees,
    DocumentTransmitteds,
}
