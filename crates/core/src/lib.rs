//! Planfact Core - plan-vs-actual reconciliation for loan issuance and collections.
//!
//! This crate joins monthly targets to recorded disbursements and payments and
//! reports performance per month and per year. It is database-agnostic and
//! defines repository traits that a storage layer implements.

pub mod categories;
pub mod config;
pub mod constants;
pub mod errors;
pub mod plans;
pub mod reporting;
pub mod transactions;
pub mod utils;

pub use config::{CategoryLabels, ReportingConfig};
pub use reporting::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
