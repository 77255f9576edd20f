//! Percent Discount Policy
//!
//! A fraction of the base fee off, e.g. "10% off Monday mornings"

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    conditions::DiscountConditions,
    discounts::{DiscountError, discount_on},
    policies::{ConditionalDiscount, PolicyError},
    screenings::Screening,
};

/// Subtracts a fraction of the movie's base fee when any condition matches
#[derive(Debug, Clone, PartialEq)]
pub struct PercentDiscountPolicy {
    percentage: Percentage,
    conditions: DiscountConditions,
}

impl PercentDiscountPolicy {
    /// Create a new percent discount policy. `percentage` is a fraction, so `0.1` is 10%.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::NoConditions`]: `conditions` is empty.
    /// - [`PolicyError::PercentageOutOfRange`]: `percentage` is outside `[0, 1]`.
    pub fn new(
        percentage: Percentage,
        conditions: impl Into<DiscountConditions>,
    ) -> Result<Self, PolicyError> {
        let conditions = conditions.into();

        if conditions.is_empty() {
            return Err(PolicyError::NoConditions);
        }

        let fraction = percentage * Decimal::ONE;

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(PolicyError::PercentageOutOfRange(fraction));
        }

        Ok(Self {
            percentage,
            conditions,
        })
    }

    /// Return the discount fraction
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }
}

impl<'a> ConditionalDiscount<'a> for PercentDiscountPolicy {
    fn conditions(&self) -> &DiscountConditions {
        &self.conditions
    }

    fn discount_amount(
        &self,
        screening: &Screening<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        discount_on(&screening.movie_fee(), &self.percentage)
    }
}
