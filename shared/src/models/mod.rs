//! Data models
//!
//! One file per resource family. Every entity carries an `id`, an optional
//! nested `status` and a flattened audit trail, and implements [`Record`].
//! Create/Update payloads follow the entity in the same file.

pub mod assignment;
pub mod bank;
pub mod client;
pub mod common;
pub mod deadline;
pub mod organization;
pub mod pricing;
pub mod reference_item;
pub mod vehicle;
pub mod vehicle_age;
pub mod work_fee;

// Re-exports
pub use assignment::*;
pub use bank::*;
pub use client::*;
pub use common::*;
pub use deadline::*;
pub use organization::*;
pub use pricing::*;
pub use reference_item::*;
pub use vehicle::*;
pub use vehicle_age::*;
pub use work_fee::*;
