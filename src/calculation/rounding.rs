//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary results are rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to whole cents, midpoints away from zero.
///
/// This matches fixed-point formatting of the form `toFixed(2)`: `0.005`
/// becomes `0.01` and `-0.005` becomes `-0.01`.
///
/// # Examples
///
/// ```
/// use fudget::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("1516.6666").unwrap()), Decimal::from_str("1516.67").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.005").unwrap()), Decimal::from_str("0.01").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_currency(dec("433.3333")), dec("433.33"));
    }

    #[test]
    fn test_rounds_up_above_midpoint() {
        assert_eq!(round_currency(dec("2166.6666")), dec("2166.67"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("2.345")), dec("2.35"));
        assert_eq!(round_currency(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn test_whole_amount_unchanged() {
        assert_eq!(round_currency(dec("800")), dec("800"));
    }
}
