//! Application core: configuration, errors, logging, notifications

pub mod config;
pub mod error;
pub mod logging;
pub mod toast;

pub use config::AppConfig;
pub use error::{AdminError, AdminResult};
pub use toast::{Toast, ToastKind, Toasts};
