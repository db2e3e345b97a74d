//! Screen building blocks

pub mod badge;
pub mod dialog;
pub mod form;
pub mod page;
pub mod table;
pub mod workforce_editor;

pub use badge::{BadgeTone, StatusBadge};
pub use dialog::{CreateDialog, DeleteDialog, EditDialog, ViewDialog};
pub use form::{FormErrors, FormField, ResourceForm};
pub use page::ResourcePage;
pub use table::{Column, DataTable, RowAction, SortDirection, SortKey};
pub use workforce_editor::WorkforceEditor;
