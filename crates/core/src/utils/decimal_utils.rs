use log::warn;
use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, PERCENT_MULTIPLIER};

/// `part / whole * 100`, or zero when `whole` is not positive.
///
/// A zero denominator is a normal state for reporting (a month without a
/// plan, a year without activity) and yields zero, never an error.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::zero() {
        return Decimal::zero();
    }
    match part
        .checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(PERCENT_MULTIPLIER)))
    {
        Some(pct) => pct,
        None => {
            warn!("Percentage of {} over {} overflowed, reporting 0", part, whole);
            Decimal::zero()
        }
    }
}

/// Running-sum step that saturates at the `Decimal` range instead of panicking.
pub fn add_amount(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!("Sum of {} and {} overflowed, saturating", total, amount);
        total.saturating_add(amount)
    })
}

/// Rounds a value for presentation. Never call this mid-computation.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(percent_of(dec!(7500), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn over_performance_is_not_capped() {
        assert_eq!(percent_of(dec!(15000), dec!(10000)), dec!(150));
    }

    #[test]
    fn exact_for_currency_amounts() {
        assert_eq!(percent_of(dec!(7500), dec!(10000)), dec!(75));
        assert_eq!(percent_of(dec!(0.10), dec!(0.30)).round_dp(10), dec!(33.3333333333));
    }

    #[test]
    fn huge_amounts_keep_their_ratio() {
        let whole = Decimal::from_i128_with_scale(2_000_000_000_000_000_000_000_000_000, 0);
        let part = Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0);
        assert_eq!(percent_of(part, whole), dec!(50));
        assert_eq!(percent_of(Decimal::MAX, Decimal::MAX), dec!(100));
    }

    #[test]
    fn sums_saturate_instead_of_panicking() {
        assert_eq!(add_amount(dec!(1.5), dec!(2.25)), dec!(3.75));
        assert_eq!(add_amount(Decimal::MAX, Decimal::MAX), Decimal::MAX);
        assert_eq!(add_amount(Decimal::MAX, dec!(1)), Decimal::MAX);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_for_display(dec!(62.505)), dec!(62.51));
        assert_eq!(round_for_display(dec!(33.3333)), dec!(33.33));
        assert_eq!(round_for_display(dec!(75)), dec!(75.00));
    }
}
