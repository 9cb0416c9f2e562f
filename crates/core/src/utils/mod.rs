//! Shared calendar and decimal helpers used by every report.

pub mod decimal_utils;
pub mod period_utils;

pub use decimal_utils::{add_amount, percent_of, round_for_display};
pub use period_utils::{
    first_day_of_month, month_bounds, month_key, month_to_date_bounds, validate_month,
    validate_year, year_bounds, DateRange,
};
