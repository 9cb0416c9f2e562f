use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::monthly_reconciler::MonthlyReconciler;
use super::reporting_model::{MonthlyPerformance, YearTotals, YearlyPerformance};
use super::reporting_traits::ReportingServiceTrait;
use super::yearly_aggregator::{summarize_year, YearlyAggregator};
use crate::categories::CategoryRepositoryTrait;
use crate::config::ReportingConfig;
use crate::errors::Result;
use crate::plans::PlanRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;

pub struct ReportingService {
    reconciler: MonthlyReconciler,
    aggregator: YearlyAggregator,
}

impl ReportingService {
    pub fn new(
        plan_repository: Arc<dyn PlanRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        config: ReportingConfig,
    ) -> Self {
        ReportingService {
            reconciler: MonthlyReconciler::new(
                plan_repository.clone(),
                transaction_repository.clone(),
                category_repository.clone(),
                config.labels.clone(),
            ),
            aggregator: YearlyAggregator::new(
                plan_repository,
                transaction_repository,
                category_repository,
                config.labels,
            ),
        }
    }
}

#[async_trait]
impl ReportingServiceTrait for ReportingService {
    async fn monthly_report(&self, year: i32, month: u32) -> Result<Vec<MonthlyPerformance>> {
        debug!("Monthly report for {}-{:02}", year, month);
        self.reconciler.reconcile(year, month).await
    }

    async fn month_to_date_report(&self, as_of: NaiveDate) -> Result<Vec<MonthlyPerformance>> {
        debug!("Month-to-date report as of {}", as_of);
        self.reconciler.reconcile_to_date(as_of).await
    }

    async fn yearly_report(&self, year: i32) -> Result<Vec<YearlyPerformance>> {
        debug!("Yearly report for {}", year);
        self.aggregator.aggregate(year).await
    }

    async fn year_totals(&self, year: i32) -> Result<YearTotals> {
        let months = self.aggregator.aggregate(year).await?;
        Ok(summarize_year(year, &months))
    }
}
