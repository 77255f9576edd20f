//! Pricing

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while scaling prices.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Multiplying the amount overflowed the minor unit range.
    #[error("{amount} minor units multiplied by {count} overflows")]
    Overflow {
        /// Amount in minor units
        amount: i64,

        /// Scalar the amount was multiplied by
        count: i64,
    },
}

/// Returns a zero amount in the given currency.
pub fn zero(currency: &Currency) -> Money<'_, Currency> {
    Money::from_minor(0, currency)
}

/// Multiplies an amount by a whole number.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: the product does not fit in minor units.
pub fn times<'a>(money: &Money<'a, Currency>, count: i64) -> Result<Money<'a, Currency>, PricingError> {
    let amount = money.to_minor_units();

    let product = amount
        .checked_mul(count)
        .ok_or(PricingError::Overflow { amount, count })?;

    Ok(Money::from_minor(product, money.currency()))
}
