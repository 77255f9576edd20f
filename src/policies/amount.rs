//! Amount Discount Policy
//!
//! A fixed amount off the base fee, e.g. "800 won off the first screening"

use rusty_money::{Money, iso::Currency};

use crate::{
    conditions::DiscountConditions,
    discounts::DiscountError,
    policies::{ConditionalDiscount, PolicyError},
    screenings::Screening,
};

/// Subtracts a fixed amount when any condition matches
#[derive(Debug, Clone, PartialEq)]
pub struct AmountDiscountPolicy<'a> {
    amount: Money<'a, Currency>,
    conditions: DiscountConditions,
}

impl<'a> AmountDiscountPolicy<'a> {
    /// Create a new amount discount policy.
    ///
    /// The amount is not compared to any fee here; a movie checks that when the policy is attached.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::NoConditions`]: `conditions` is empty.
    /// - [`PolicyError::NegativeAmount`]: `amount` is below zero.
    pub fn new(
        amount: Money<'a, Currency>,
        conditions: impl Into<DiscountConditions>,
    ) -> Result<Self, PolicyError> {
        let conditions = conditions.into();

        if conditions.is_empty() {
            return Err(PolicyError::NoConditions);
        }

        if amount.to_minor_units() < 0 {
            return Err(PolicyError::NegativeAmount(amount.to_minor_units()));
        }

        Ok(Self { amount, conditions })
    }

    /// Return the fixed discount
    pub fn amount(&self) -> Money<'a, Currency> {
        self.amount
    }
}

impl<'a> ConditionalDiscount<'a> for AmountDiscountPolicy<'a> {
    fn conditions(&self) -> &DiscountConditions {
        &self.conditions
    }

    fn discount_amount(
        &self,
        _screening: &Screening<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        Ok(self.amount)
    }
}
