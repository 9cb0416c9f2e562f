//! Plan-vs-actual reporting.
//!
//! The monthly reconciler matches plan lines to the actuals of their role
//! within a calendar window; the yearly aggregator rolls a year into twelve
//! months with each month's share of the yearly actuals. The formatter shapes
//! both for the request boundary.

mod monthly_reconciler;
pub mod report_formatter;
mod reporting_model;
mod reporting_service;
mod reporting_traits;
mod yearly_aggregator;

pub use monthly_reconciler::MonthlyReconciler;
pub use report_formatter::{
    format_monthly_report, format_year_totals, format_yearly_report, PlanPerformanceOut,
    YearPerformanceOut, YearTotalsOut,
};
pub use reporting_model::*;
pub use reporting_service::ReportingService;
pub use reporting_traits::ReportingServiceTrait;
pub use yearly_aggregator::{summarize_year, YearlyAggregator};
