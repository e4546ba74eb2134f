//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Number of decimal places every settlement amount is rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half away from zero.
///
/// Intermediate values (the earnings average, daily rates, fractional years)
/// keep full precision; only final line amounts go through this function.
///
/// # Example
///
/// ```
/// use finiquito_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2583.335").unwrap()).to_string(), "2583.34");
/// assert_eq!(round_money(Decimal::from_str("-64.605").unwrap()).to_string(), "-64.61");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplies two amounts, failing instead of panicking when the product
/// does not fit in a `Decimal`.
pub(crate) fn checked_product(a: Decimal, b: Decimal, context: &str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

/// Sums amounts with overflow reported as [`EngineError::AmountOverflow`].
pub(crate) fn checked_total<I>(amounts: I, context: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| overflow(context))
}

fn overflow(context: &str) -> EngineError {
    EngineError::AmountOverflow {
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_money(dec("10.005")), dec("10.01"));
        assert_eq!(round_money(dec("10.004999")), dec("10.00"));
    }

    #[test]
    fn test_rounds_negative_half_away_from_zero() {
        assert_eq!(round_money(dec("-10.005")), dec("-10.01"));
    }

    #[test]
    fn test_repeating_fraction() {
        let average = dec("15500") / dec("3");
        assert_eq!(round_money(average), dec("5166.67"));
    }

    #[test]
    fn test_checked_product_reports_overflow() {
        match checked_product(Decimal::MAX, dec("2"), "indemnity") {
            Err(EngineError::AmountOverflow { context }) => assert_eq!(context, "indemnity"),
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
        assert_eq!(
            checked_product(dec("5166.67"), dec("3.5"), "indemnity").unwrap(),
            dec("18083.345")
        );
    }

    #[test]
    fn test_checked_total_reports_overflow() {
        let huge = dec("50000000000000000000000000000");
        assert!(matches!(
            checked_total([huge, huge], "settlement total"),
            Err(EngineError::AmountOverflow { .. })
        ));
        assert_eq!(
            checked_total([dec("1.10"), dec("-0.10")], "settlement total").unwrap(),
            dec("1.00")
        );
        assert_eq!(checked_total(Vec::new(), "empty").unwrap(), Decimal::ZERO);
    }
}
