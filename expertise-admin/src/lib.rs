//! Expertise back-office administration
//!
//! Headless rendition of the back-office screens: per-resource stores,
//! data tables, create/edit/view/delete dialogs and pages composing them.
//! Everything renders to text so the same code drives the terminal binary
//! and the tests.

pub use expertise_client;
pub use shared;

pub mod cli;
pub mod core;
pub mod resources;
pub mod store;
pub mod ui;
pub mod utils;

pub use crate::core::{AdminError, AdminResult, AppConfig, Toast, ToastKind, Toasts};
pub use resources::{AdminResource, ResourceKind};
pub use store::{LoadState, ResourceStore, StoreState};
pub use ui::{
    CreateDialog, DataTable, DeleteDialog, EditDialog, FormErrors, ResourceForm, ResourcePage,
    ViewDialog, WorkforceEditor,
};
