use std::sync::Arc;

use chrono::Datelike;
use futures::try_join;
use log::{debug, error, warn};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::reporting_model::{RoleMonthFigures, RoleYearTotals, YearTotals, YearlyPerformance};
use crate::categories::{CategoryRepositoryTrait, CategoryResolver, Role};
use crate::config::CategoryLabels;
use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{ReportingError, Result};
use crate::plans::{PlanLine, PlanRepositoryTrait};
use crate::transactions::{CollectionEvent, DatedAmount, IssuanceEvent, TransactionRepositoryTrait};
use crate::utils::{add_amount, month_key, percent_of, year_bounds, DateRange};

const MONTHS: usize = MONTHS_PER_YEAR as usize;

#[derive(Debug, Clone, Default)]
struct MonthAccumulator {
    event_count: u32,
    plan_amount: Decimal,
    actual_amount: Decimal,
}

/// Twelve month buckets for one role.
#[derive(Debug, Clone, Default)]
struct RoleBuckets {
    months: [MonthAccumulator; MONTHS],
}

impl RoleBuckets {
    fn add_plan(&mut self, plan: &PlanLine) {
        let bucket = &mut self.months[plan.period.month0() as usize];
        bucket.plan_amount = add_amount(bucket.plan_amount, plan.amount);
    }

    fn add_events<E: DatedAmount>(&mut self, events: &[E], year_range: DateRange) {
        let mut skipped = 0usize;
        for event in events {
            let date = event.date();
            if !year_range.contains(date) {
                skipped += 1;
                continue;
            }
            let bucket = &mut self.months[date.month0() as usize];
            bucket.event_count = bucket.event_count.saturating_add(1);
            bucket.actual_amount = add_amount(bucket.actual_amount, event.amount());
        }
        if skipped > 0 {
            warn!(
                "Skipped {} events outside {}..={}",
                skipped, year_range.start, year_range.end
            );
        }
    }

    /// Per-month figures with shares of the role's yearly actuals.
    fn into_figures(self) -> Vec<RoleMonthFigures> {
        let total_actual = self
            .months
            .iter()
            .fold(Decimal::zero(), |acc, m| add_amount(acc, m.actual_amount));

        self.months
            .into_iter()
            .map(|m| RoleMonthFigures {
                event_count: m.event_count,
                plan_amount: m.plan_amount,
                actual_amount: m.actual_amount,
                performance_pct: percent_of(m.actual_amount, m.plan_amount),
                share_of_year_pct: percent_of(m.actual_amount, total_actual),
            })
            .collect()
    }
}

/// Rolls a year of plans and events into twelve monthly records.
pub struct YearlyAggregator {
    plan_repository: Arc<dyn PlanRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    labels: CategoryLabels,
}

impl YearlyAggregator {
    pub fn new(
        plan_repository: Arc<dyn PlanRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        labels: CategoryLabels,
    ) -> Self {
        YearlyAggregator {
            plan_repository,
            transaction_repository,
            category_repository,
            labels,
        }
    }

    /// Always exactly twelve records, January first.
    pub async fn aggregate(&self, year: i32) -> Result<Vec<YearlyPerformance>> {
        let year_range = year_bounds(year)?;
        debug!("Aggregating year {}", year);

        let (plans, resolver, issuance, collections) = try_join!(
            self.plan_repository.find_plans(year_range),
            CategoryResolver::load(self.category_repository.as_ref(), &self.labels),
            self.transaction_repository.find_issuance(year_range),
            self.transaction_repository.find_collections(year_range),
        )
        .map_err(|e| {
            error!("Failed to load records for year {}: {}", year, e);
            e
        })?;

        debug!(
            "Year {}: {} plans, {} issuance events, {} collection events",
            year,
            plans.len(),
            issuance.len(),
            collections.len()
        );

        let months = aggregate_year(year, &plans, &resolver, &issuance, &collections)?;
        Ok(months)
    }
}

/// Pure yearly fold over already-fetched records.
pub(crate) fn aggregate_year(
    year: i32,
    plans: &[PlanLine],
    resolver: &CategoryResolver,
    issuance: &[IssuanceEvent],
    collections: &[CollectionEvent],
) -> std::result::Result<Vec<YearlyPerformance>, ReportingError> {
    let year_range = year_bounds(year)?;
    let mut issuance_buckets = RoleBuckets::default();
    let mut collection_buckets = RoleBuckets::default();

    for plan in plans {
        plan.validate_period()?;
        if !year_range.contains(plan.period) {
            warn!(
                "Skipping plan for category {} with period {} outside year {}",
                plan.category_id, plan.period, year
            );
            continue;
        }
        match resolver.resolve(plan.category_id) {
            Role::Issuance => issuance_buckets.add_plan(plan),
            Role::Collection => collection_buckets.add_plan(plan),
            Role::Unclassified => {}
        }
    }

    issuance_buckets.add_events(issuance, year_range);
    collection_buckets.add_events(collections, year_range);

    let records = issuance_buckets
        .into_figures()
        .into_iter()
        .zip(collection_buckets.into_figures())
        .zip(1..=MONTHS_PER_YEAR)
        .map(|((issuance, collection), month)| YearlyPerformance {
            month: month_key(year, month),
            year,
            month_number: month,
            issuance,
            collection,
        })
        .collect();
    Ok(records)
}

/// Whole-year totals per role from a yearly report.
pub fn summarize_year(year: i32, months: &[YearlyPerformance]) -> YearTotals {
    YearTotals {
        year,
        issuance: role_totals(months.iter().map(|m| &m.issuance)),
        collection: role_totals(months.iter().map(|m| &m.collection)),
    }
}

fn role_totals<'a>(figures: impl Iterator<Item = &'a RoleMonthFigures>) -> RoleYearTotals {
    let mut totals = figures.fold(RoleYearTotals::default(), |mut acc, f| {
        acc.event_count = acc.event_count.saturating_add(f.event_count);
        acc.plan_amount = add_amount(acc.plan_amount, f.plan_amount);
        acc.actual_amount = add_amount(acc.actual_amount, f.actual_amount);
        acc
    });
    totals.performance_pct = percent_of(totals.actual_amount, totals.plan_amount);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn resolver() -> CategoryResolver {
        CategoryResolver::new(
            vec![
                Category::new(1, "видача"),
                Category::new(2, "збір"),
                Category::new(3, "відсотки"),
            ],
            &CategoryLabels::default(),
        )
    }

    #[test]
    fn empty_year_still_has_twelve_zero_months() {
        let months = aggregate_year(2024, &[], &resolver(), &[], &[]).unwrap();

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month, "2024-01");
        assert_eq!(months[11].month, "2024-12");
        for m in &months {
            assert_eq!(m.issuance, RoleMonthFigures::default());
            assert_eq!(m.collection, RoleMonthFigures::default());
        }
    }

    #[test]
    fn shares_split_the_year_by_role() {
        let issuance = vec![
            IssuanceEvent::new(date(2024, 2, 10), dec!(20000)),
            IssuanceEvent::new(date(2024, 2, 28), dec!(30000)),
            IssuanceEvent::new(date(2024, 7, 1), dec!(30000)),
        ];
        let collections = vec![CollectionEvent::new(date(2024, 5, 31), dec!(1200))];

        let months = aggregate_year(2024, &[], &resolver(), &issuance, &collections).unwrap();

        assert_eq!(months[1].issuance.actual_amount, dec!(50000));
        assert_eq!(months[1].issuance.event_count, 2);
        assert_eq!(months[1].issuance.share_of_year_pct, dec!(62.5));
        assert_eq!(months[6].issuance.share_of_year_pct, dec!(37.5));
        assert_eq!(months[4].collection.share_of_year_pct, dec!(100));
        assert_eq!(months[4].issuance.share_of_year_pct, Decimal::ZERO);
    }

    #[test]
    fn plans_accumulate_per_role_and_ignore_unclassified() {
        let plans = vec![
            PlanLine::new(date(2024, 3, 1), dec!(1000), 1),
            PlanLine::new(date(2024, 3, 1), dec!(400), 2),
            PlanLine::new(date(2024, 3, 1), dec!(99), 3),
        ];
        let issuance = vec![IssuanceEvent::new(date(2024, 3, 3), dec!(800))];

        let months = aggregate_year(2024, &plans, &resolver(), &issuance, &[]).unwrap();

        let march = &months[2];
        assert_eq!(march.issuance.plan_amount, dec!(1000));
        assert_eq!(march.issuance.performance_pct, dec!(80));
        assert_eq!(march.collection.plan_amount, dec!(400));
        assert_eq!(march.collection.actual_amount, Decimal::ZERO);
        assert_eq!(march.collection.performance_pct, Decimal::ZERO);
    }

    #[test]
    fn summary_totals_each_role() {
        let plans = vec![
            PlanLine::new(date(2024, 1, 1), dec!(1000), 1),
            PlanLine::new(date(2024, 2, 1), dec!(1000), 1),
        ];
        let issuance = vec![
            IssuanceEvent::new(date(2024, 1, 15), dec!(500)),
            IssuanceEvent::new(date(2024, 2, 15), dec!(1000)),
            IssuanceEvent::new(date(2024, 9, 15), dec!(1500)),
        ];

        let months = aggregate_year(2024, &plans, &resolver(), &issuance, &[]).unwrap();
        let totals = summarize_year(2024, &months);

        assert_eq!(totals.year, 2024);
        assert_eq!(totals.issuance.event_count, 3);
        assert_eq!(totals.issuance.plan_amount, dec!(2000));
        assert_eq!(totals.issuance.actual_amount, dec!(3000));
        assert_eq!(totals.issuance.performance_pct, dec!(150));
        assert_eq!(totals.collection, RoleYearTotals::default());
    }

    #[test]
    fn oversized_amounts_saturate_without_panicking() {
        let plans = vec![
            PlanLine::new(date(2024, 6, 1), Decimal::MAX, 1),
            PlanLine::new(date(2024, 6, 1), Decimal::MAX, 1),
        ];
        let issuance = vec![
            IssuanceEvent::new(date(2024, 6, 3), Decimal::MAX),
            IssuanceEvent::new(date(2024, 6, 4), Decimal::MAX),
        ];

        let months = aggregate_year(2024, &plans, &resolver(), &issuance, &[]).unwrap();
        let june = &months[5].issuance;
        assert_eq!(june.event_count, 2);
        assert_eq!(june.plan_amount, Decimal::MAX);
        assert_eq!(june.actual_amount, Decimal::MAX);
        assert_eq!(june.performance_pct, dec!(100));
        assert_eq!(june.share_of_year_pct, dec!(100));

        let totals = summarize_year(2024, &months);
        assert_eq!(totals.issuance.actual_amount, Decimal::MAX);
        assert_eq!(totals.issuance.performance_pct, dec!(100));
    }

    #[test]
    fn events_from_other_years_are_skipped() {
        let issuance = vec![
            IssuanceEvent::new(date(2023, 12, 31), dec!(10)),
            IssuanceEvent::new(date(2024, 1, 1), dec!(20)),
        ];

        let months = aggregate_year(2024, &[], &resolver(), &issuance, &[]).unwrap();

        assert_eq!(months[0].issuance.actual_amount, dec!(20));
        assert_eq!(months[0].issuance.share_of_year_pct, dec!(100));
        assert_eq!(months[11].issuance.actual_amount, Decimal::ZERO);
    }
}
