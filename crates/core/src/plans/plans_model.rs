//! Plan domain models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::CategoryId;
use crate::errors::ReportingError;

/// Target amount for one category in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLine {
    pub id: Option<i32>,
    /// Always the first day of the planned month.
    pub period: NaiveDate,
    pub amount: Decimal,
    pub category_id: CategoryId,
}

impl PlanLine {
    pub fn new(period: NaiveDate, amount: Decimal, category_id: CategoryId) -> Self {
        PlanLine {
            id: None,
            period,
            amount,
            category_id,
        }
    }

    /// Rejects plans whose period is not a month start.
    pub fn validate_period(&self) -> Result<(), ReportingError> {
        if self.period.day() == 1 {
            Ok(())
        } else {
            Err(ReportingError::PlanPeriodNotMonthStart {
                category_id: self.category_id,
                period: self.period,
            })
        }
    }

    pub fn month(&self) -> u32 {
        self.period.month()
    }
}
