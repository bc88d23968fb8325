pub mod billing;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod tracing_setup;

pub use error::BillingError;
