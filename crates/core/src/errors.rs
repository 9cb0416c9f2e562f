//! Core error types for the reconciliation engine.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! are converted to [`DatabaseError`] by whichever layer implements the
//! repository traits.

use chrono::NaiveDate;
use thiserror::Error;

use crate::categories::CategoryId;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
///
/// Only two kinds of failure ever reach a caller: a period that cannot be
/// reported on, and a failure of the underlying store. Missing data is never
/// an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] ReportingError),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its own errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Periods the engine refuses to report on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportingError {
    #[error("month {month} is outside 1-12")]
    InvalidMonth { month: u32 },

    #[error("year {year} is outside the supported calendar range")]
    InvalidYear { year: i32 },

    #[error("plan for category {category_id} has period {period}, expected the first day of a month")]
    PlanPeriodNotMonthStart {
        category_id: CategoryId,
        period: NaiveDate,
    },
}

impl Error {
    /// True when the failure came from the data access layer.
    pub fn is_data_access_failure(&self) -> bool {
        matches!(self, Error::Database(_))
    }
}
