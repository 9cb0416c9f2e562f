use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_REPORT_YEAR, MIN_REPORT_YEAR, MONTHS_PER_YEAR};
use crate::errors::ReportingError;

/// Inclusive calendar window `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// The full calendar month `year-month`.
    pub fn month(year: i32, month: u32) -> Result<Self, ReportingError> {
        let (start, end) = month_bounds(year, month)?;
        Ok(DateRange { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn validate_month(month: u32) -> Result<(), ReportingError> {
    if (1..=MONTHS_PER_YEAR).contains(&month) {
        Ok(())
    } else {
        Err(ReportingError::InvalidMonth { month })
    }
}

/// Years whose month keys fit the four-digit `YYYY-MM` form.
pub fn validate_year(year: i32) -> Result<(), ReportingError> {
    if (MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(ReportingError::InvalidYear { year })
    }
}

/// First and last day of a calendar month.
///
/// December never rolls into the following year and February follows the
/// leap-year rules of the proleptic Gregorian calendar.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), ReportingError> {
    validate_year(year)?;
    validate_month(month)?;
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(ReportingError::InvalidYear { year })?;
    let last = if month == MONTHS_PER_YEAR {
        NaiveDate::from_ymd_opt(year, MONTHS_PER_YEAR, 31)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).and_then(|next| next.pred_opt())
    }
    .ok_or(ReportingError::InvalidYear { year })?;
    Ok((first, last))
}

/// January 1st through December 31st of `year`.
pub fn year_bounds(year: i32) -> Result<DateRange, ReportingError> {
    let (start, _) = month_bounds(year, 1)?;
    let (_, end) = month_bounds(year, MONTHS_PER_YEAR)?;
    Ok(DateRange { start, end })
}

/// From the first day of `as_of`'s month up to and including `as_of`.
pub fn month_to_date_bounds(as_of: NaiveDate) -> DateRange {
    DateRange {
        start: first_day_of_month(as_of),
        end: as_of,
    }
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Canonical `YYYY-MM` label of a month. Callers pass years accepted by
/// [`validate_year`].
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}
