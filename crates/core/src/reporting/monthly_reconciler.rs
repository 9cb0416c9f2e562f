use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use futures::try_join;
use log::{debug, error, warn};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::reporting_model::MonthlyPerformance;
use crate::categories::{CategoryRepositoryTrait, CategoryResolver, Role};
use crate::config::CategoryLabels;
use crate::errors::{ReportingError, Result};
use crate::plans::{PlanLine, PlanRepositoryTrait};
use crate::transactions::{CollectionEvent, DatedAmount, IssuanceEvent, TransactionRepositoryTrait};
use crate::utils::{add_amount, month_to_date_bounds, percent_of, DateRange};

/// Count and sum of the events that fall inside a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EventTotals {
    pub count: u32,
    pub amount: Decimal,
}

impl EventTotals {
    /// Events outside `window` are skipped.
    pub fn collect<E: DatedAmount>(events: &[E], window: DateRange) -> Self {
        let mut totals = EventTotals::default();
        let mut skipped = 0usize;
        for event in events {
            if window.contains(event.date()) {
                totals.count = totals.count.saturating_add(1);
                totals.amount = add_amount(totals.amount, event.amount());
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!(
                "Skipped {} events outside {}..={}",
                skipped, window.start, window.end
            );
        }
        totals
    }
}

/// Matches each plan line of a month to the actuals of its category's role.
pub struct MonthlyReconciler {
    plan_repository: Arc<dyn PlanRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    labels: CategoryLabels,
}

impl MonthlyReconciler {
    pub fn new(
        plan_repository: Arc<dyn PlanRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        labels: CategoryLabels,
    ) -> Self {
        MonthlyReconciler {
            plan_repository,
            transaction_repository,
            category_repository,
            labels,
        }
    }

    /// Full calendar month `year-month`.
    pub async fn reconcile(&self, year: i32, month: u32) -> Result<Vec<MonthlyPerformance>> {
        let window = DateRange::month(year, month)?;
        self.reconcile_window(window, window).await
    }

    /// Plans of `as_of`'s month against actuals from the 1st through `as_of`.
    pub async fn reconcile_to_date(&self, as_of: NaiveDate) -> Result<Vec<MonthlyPerformance>> {
        let plan_range = DateRange::month(as_of.year(), as_of.month())?;
        let actual_window = month_to_date_bounds(as_of);
        self.reconcile_window(plan_range, actual_window).await
    }

    async fn reconcile_window(
        &self,
        plan_range: DateRange,
        actual_window: DateRange,
    ) -> Result<Vec<MonthlyPerformance>> {
        debug!(
            "Reconciling plans {}..={} against actuals {}..={}",
            plan_range.start, plan_range.end, actual_window.start, actual_window.end
        );

        let (plans, resolver) = try_join!(
            self.plan_repository.find_plans(plan_range),
            CategoryResolver::load(self.category_repository.as_ref(), &self.labels),
        )
        .map_err(|e| {
            error!("Failed to load plans or categories: {}", e);
            e
        })?;

        if plans.is_empty() {
            debug!("No plans between {} and {}", plan_range.start, plan_range.end);
            return Ok(Vec::new());
        }

        let needs = |role: Role| plans.iter().any(|p| resolver.resolve(p.category_id) == role);
        let needs_issuance = needs(Role::Issuance);
        let needs_collections = needs(Role::Collection);

        let (issuance, collections) = try_join!(
            async {
                if needs_issuance {
                    self.transaction_repository.find_issuance(actual_window).await
                } else {
                    Ok(Vec::new())
                }
            },
            async {
                if needs_collections {
                    self.transaction_repository
                        .find_collections(actual_window)
                        .await
                } else {
                    Ok(Vec::new())
                }
            },
        )
        .map_err(|e| {
            error!("Failed to load transactions: {}", e);
            e
        })?;

        let lines = reconcile_plans(
            plans,
            &resolver,
            &issuance,
            &collections,
            plan_range,
            actual_window,
        )?;
        debug!("Reconciled {} plan lines", lines.len());
        Ok(lines)
    }
}

/// Pure reconciliation fold over already-fetched records.
pub(crate) fn reconcile_plans(
    plans: Vec<PlanLine>,
    resolver: &CategoryResolver,
    issuance: &[IssuanceEvent],
    collections: &[CollectionEvent],
    plan_range: DateRange,
    actual_window: DateRange,
) -> std::result::Result<Vec<MonthlyPerformance>, ReportingError> {
    let issued = EventTotals::collect(issuance, actual_window);
    let collected = EventTotals::collect(collections, actual_window);
    debug!(
        "{} issuance and {} collection events in window",
        issued.count, collected.count
    );

    let mut lines = Vec::with_capacity(plans.len());
    for plan in plans {
        plan.validate_period()?;
        if !plan_range.contains(plan.period) {
            warn!(
                "Skipping plan for category {} with period {} outside {}..={}",
                plan.category_id, plan.period, plan_range.start, plan_range.end
            );
            continue;
        }

        let role = resolver.resolve(plan.category_id);
        let actual_amount = match role {
            Role::Issuance => issued.amount,
            Role::Collection => collected.amount,
            Role::Unclassified => Decimal::zero(),
        };

        lines.push(MonthlyPerformance {
            period: plan.period,
            category_id: plan.category_id,
            category_name: resolver.name_of(plan.category_id),
            role,
            plan_amount: plan.amount,
            actual_amount,
            performance_pct: percent_of(actual_amount, plan.amount),
        });
    }

    lines.sort_by(|a, b| {
        a.period
            .cmp(&b.period)
            .then_with(|| a.category_name.cmp(&b.category_name))
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    Ok(lines)
}
