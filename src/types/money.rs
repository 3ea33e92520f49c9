//! Fixed-point money helpers
//!
//! Every amount in the ledger is a [`Decimal`] with two-digit precision.
//! Conversions to cents always truncate toward zero, never round up, so a
//! person is never debited or credited more than their exact share.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for every monetary amount
pub const CENT_SCALE: u32 = 2;

/// The whole that split percentages must add up to
pub const FULL_SHARE: Decimal = Decimal::ONE_HUNDRED;

/// Truncate an amount toward zero at two decimal places
///
/// `12.349` becomes `12.34` and `-12.349` becomes `-12.34`.
pub fn truncate_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::ToZero)
}

/// Share of `cost` corresponding to `percent` percent, truncated to cents
///
/// Returns `None` if the intermediate product overflows.
pub fn percent_of(cost: Decimal, percent: Decimal) -> Option<Decimal> {
    cost.checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(FULL_SHARE))
        .map(truncate_cents)
}

/// Equal share of `cost` among `count` people, truncated to cents
///
/// Divides the cost directly instead of going through `100 / count`, which
/// does not terminate for most counts and would lose a cent on exact splits.
pub fn equal_share(cost: Decimal, count: usize) -> Option<Decimal> {
    if count == 0 {
        return None;
    }
    cost.checked_div(Decimal::from(count)).map(truncate_cents)
}

/// Render an amount with exactly two decimal places
pub fn format_cents(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case::exact("12.34", "12.34")]
    #[case::drops_third_digit("12.349", "12.34")]
    #[case::never_rounds_up("0.999", "0.99")]
    #[case::negative_toward_zero("-12.349", "-12.34")]
    #[case::integer("100", "100")]
    fn test_truncate_cents(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(truncate_cents(dec(input)), dec(expected));
    }

    #[rstest]
    #[case::ten_percent("1000", "10", "100")]
    #[case::sixty_percent("1000", "60", "600")]
    #[case::fractional_result("10", "33", "3.3")]
    #[case::truncated_result("0.99", "50", "0.49")]
    #[case::fractional_percent("100", "33.333", "33.33")]
    fn test_percent_of(#[case] cost: &str, #[case] percent: &str, #[case] expected: &str) {
        assert_eq!(percent_of(dec(cost), dec(percent)), Some(dec(expected)));
    }

    #[rstest]
    #[case::even("300", 3, "100")]
    #[case::uneven("100", 3, "33.33")]
    #[case::single("42.42", 1, "42.42")]
    #[case::two("1000", 2, "500")]
    fn test_equal_share(#[case] cost: &str, #[case] count: usize, #[case] expected: &str) {
        assert_eq!(equal_share(dec(cost), count), Some(dec(expected)));
    }

    #[test]
    fn test_equal_share_of_nobody() {
        assert_eq!(equal_share(dec("100"), 0), None);
    }

    #[rstest]
    #[case("100", "100.00")]
    #[case("-33.3", "-33.30")]
    #[case("0", "0.00")]
    fn test_format_cents(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(format_cents(dec(amount)), expected);
    }
}
