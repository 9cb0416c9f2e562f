//! Report models produced by the reconciler and the aggregator.
//!
//! Every amount and percentage here is unrounded. Rounding belongs to the
//! formatter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::{CategoryId, Role};

/// One plan line reconciled against the actuals of its role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    pub period: NaiveDate,
    pub category_id: CategoryId,
    pub category_name: String,
    pub role: Role,
    pub plan_amount: Decimal,
    pub actual_amount: Decimal,
    /// `actual / plan * 100`, zero when the plan is zero.
    pub performance_pct: Decimal,
}

/// Figures of one role in one month of a yearly report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMonthFigures {
    pub event_count: u32,
    pub plan_amount: Decimal,
    pub actual_amount: Decimal,
    pub performance_pct: Decimal,
    /// This month's actual amount as a share of the role's yearly actuals.
    pub share_of_year_pct: Decimal,
}

/// One month of a yearly report, issuance and collection side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPerformance {
    /// `YYYY-MM`
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    pub issuance: RoleMonthFigures,
    pub collection: RoleMonthFigures,
}

impl YearlyPerformance {
    /// Figures for a role; `None` for [`Role::Unclassified`], which is not
    /// aggregated yearly.
    pub fn figures(&self, role: Role) -> Option<&RoleMonthFigures> {
        match role {
            Role::Issuance => Some(&self.issuance),
            Role::Collection => Some(&self.collection),
            Role::Unclassified => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleYearTotals {
    pub event_count: u32,
    pub plan_amount: Decimal,
    pub actual_amount: Decimal,
    pub performance_pct: Decimal,
}

/// Whole-year totals per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTotals {
    pub year: i32,
    pub issuance: RoleYearTotals,
    pub collection: RoleYearTotals,
}
