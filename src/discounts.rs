//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not representable in minor units")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculate the discount amount on a price for a percentage.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the result cannot be represented in minor units.
pub fn discount_on<'a>(
    price: &Money<'a, Currency>,
    percent: &Percentage,
) -> Result<Money<'a, Currency>, DiscountError> {
    let discount_minor = percent_of_minor(percent, price.to_minor_units())?;

    Ok(Money::from_minor(discount_minor, price.currency()))
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// Half a minor unit rounds away from zero.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the multiplication overflows or the rounded
/// result does not fit in an `i64`.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let fraction = *percent * Decimal::ONE;

    let Some(applied) = fraction.checked_mul(Decimal::from(minor)) else {
        return Err(DiscountError::PercentConversion);
    };

    let rounded = applied.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    rounded.to_i64().ok_or(DiscountError::PercentConversion)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, KRW};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_of_minor_applies_fraction() -> TestResult {
        assert_eq!(percent_of_minor(&Percentage::from(0.1), 10_000)?, 1_000);
        assert_eq!(percent_of_minor(&Percentage::from(0.25), 200)?, 50);

        Ok(())
    }

    #[test]
    fn percent_of_minor_rounds_half_away_from_zero() -> TestResult {
        assert_eq!(percent_of_minor(&Percentage::from(0.5), 5)?, 3);
        assert_eq!(percent_of_minor(&Percentage::from(0.5), -5)?, -3);

        Ok(())
    }

    #[test]
    fn percent_of_minor_zero_and_full() -> TestResult {
        assert_eq!(percent_of_minor(&Percentage::from(0.0), 9_999)?, 0);
        assert_eq!(percent_of_minor(&Percentage::from(1.0), 9_999)?, 9_999);

        Ok(())
    }

    #[test]
    fn percent_of_minor_overflow_returns_error() {
        let result = percent_of_minor(&Percentage::from(2.0), i64::MAX);

        assert_eq!(result, Err(DiscountError::PercentConversion));
    }

    #[test]
    fn percent_of_minor_underflow_returns_error() {
        let result = percent_of_minor(&Percentage::from(2.0), i64::MIN);

        assert_eq!(result, Err(DiscountError::PercentConversion));
    }

    #[test]
    fn discount_on_keeps_currency() -> TestResult {
        let price = Money::from_minor(200, GBP);

        let discount = discount_on(&price, &Percentage::from(0.25))?;

        assert_eq!(discount, Money::from_minor(50, GBP));

        Ok(())
    }

    #[test]
    fn discount_on_zero_exponent_currency() -> TestResult {
        let price = Money::from_minor(10_000, KRW);

        let discount = discount_on(&price, &Percentage::from(0.1))?;

        assert_eq!(discount.to_minor_units(), 1_000);
        assert_eq!(discount.currency(), KRW);

        Ok(())
    }
}
