pub mod debounce;
pub mod format;
pub mod validation;

pub use debounce::Debouncer;
