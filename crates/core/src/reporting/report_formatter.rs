//! Response shapes for the request boundary.
//!
//! This is the only place where amounts and percentages are rounded.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reporting_model::{MonthlyPerformance, YearTotals, YearlyPerformance};
use crate::utils::round_for_display;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPerformanceOut {
    pub month: NaiveDate,
    pub category: String,
    pub plan_sum: Decimal,
    pub actual_sum: Decimal,
    pub performance_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPerformanceOut {
    pub month: String,
    pub year: i32,
    pub issue_count: u32,
    pub plan_issue_sum: Decimal,
    pub actual_issue_sum: Decimal,
    pub issue_performance_percent: Decimal,
    pub payment_count: u32,
    pub plan_payment_sum: Decimal,
    pub actual_payment_sum: Decimal,
    pub payment_performance_percent: Decimal,
    pub issue_share: Decimal,
    pub payment_share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTotalsOut {
    pub year: i32,
    pub issue_count: u32,
    pub plan_issue_sum: Decimal,
    pub actual_issue_sum: Decimal,
    pub issue_performance_percent: Decimal,
    pub payment_count: u32,
    pub plan_payment_sum: Decimal,
    pub actual_payment_sum: Decimal,
    pub payment_performance_percent: Decimal,
}

impl From<&MonthlyPerformance> for PlanPerformanceOut {
    fn from(line: &MonthlyPerformance) -> Self {
        PlanPerformanceOut {
            month: line.period,
            category: line.category_name.clone(),
            plan_sum: round_for_display(line.plan_amount),
            actual_sum: round_for_display(line.actual_amount),
            performance_percent: round_for_display(line.performance_pct),
        }
    }
}

impl From<&YearlyPerformance> for YearPerformanceOut {
    fn from(month: &YearlyPerformance) -> Self {
        let issue = &month.issuance;
        let payment = &month.collection;
        YearPerformanceOut {
            month: month.month.clone(),
            year: month.year,
            issue_count: issue.event_count,
            plan_issue_sum: round_for_display(issue.plan_amount),
            actual_issue_sum: round_for_display(issue.actual_amount),
            issue_performance_percent: round_for_display(issue.performance_pct),
            payment_count: payment.event_count,
            plan_payment_sum: round_for_display(payment.plan_amount),
            actual_payment_sum: round_for_display(payment.actual_amount),
            payment_performance_percent: round_for_display(payment.performance_pct),
            issue_share: round_for_display(issue.share_of_year_pct),
            payment_share: round_for_display(payment.share_of_year_pct),
        }
    }
}

impl From<&YearTotals> for YearTotalsOut {
    fn from(totals: &YearTotals) -> Self {
        let issue = &totals.issuance;
        let payment = &totals.collection;
        YearTotalsOut {
            year: totals.year,
            issue_count: issue.event_count,
            plan_issue_sum: round_for_display(issue.plan_amount),
            actual_issue_sum: round_for_display(issue.actual_amount),
            issue_performance_percent: round_for_display(issue.performance_pct),
            payment_count: payment.event_count,
            plan_payment_sum: round_for_display(payment.plan_amount),
            actual_payment_sum: round_for_display(payment.actual_amount),
            payment_performance_percent: round_for_display(payment.performance_pct),
        }
    }
}

pub fn format_monthly_report(lines: &[MonthlyPerformance]) -> Vec<PlanPerformanceOut> {
    lines.iter().map(PlanPerformanceOut::from).collect()
}

pub fn format_yearly_report(months: &[YearlyPerformance]) -> Vec<YearPerformanceOut> {
    months.iter().map(YearPerformanceOut::from).collect()
}

pub fn format_year_totals(totals: &YearTotals) -> YearTotalsOut {
    YearTotalsOut::from(totals)
}
