//! Reporting service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::reporting_model::{MonthlyPerformance, YearTotals, YearlyPerformance};
use crate::errors::Result;

/// Trait defining the contract for plan-vs-actual reporting.
///
/// Every operation is a pure function of its arguments and the current
/// state of the records; business-data absence never produces an error.
#[async_trait]
pub trait ReportingServiceTrait: Send + Sync {
    /// Plan lines of a full calendar month reconciled against that month's actuals.
    ///
    /// # Errors
    /// `InvalidPeriod` when `month` is outside 1-12 or a plan period is not a
    /// month start; data access failures are propagated unchanged.
    async fn monthly_report(&self, year: i32, month: u32) -> Result<Vec<MonthlyPerformance>>;

    /// Plan lines of `as_of`'s month reconciled against actuals recorded
    /// from the first of the month through `as_of`.
    async fn month_to_date_report(&self, as_of: NaiveDate) -> Result<Vec<MonthlyPerformance>>;

    /// Exactly twelve monthly records, issuance and collection side by side.
    async fn yearly_report(&self, year: i32) -> Result<Vec<YearlyPerformance>>;

    /// Whole-year totals per role.
    async fn year_totals(&self, year: i32) -> Result<YearTotals>;
}
