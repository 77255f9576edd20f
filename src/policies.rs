//! Discount Policies
//!
//! A policy decides how much to take off a movie's base fee for a screening.
//! Eligibility is checked against the policy's conditions first; only an
//! eligible screening reaches the variant-specific amount calculation.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    conditions::DiscountConditions, discounts::DiscountError, pricing::zero,
    screenings::Screening,
};

pub mod amount;
pub mod none;
pub mod percent;

pub use amount::AmountDiscountPolicy;
pub use none::NoneDiscountPolicy;
pub use percent::PercentDiscountPolicy;

/// Errors raised when constructing a policy in an invalid state.
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    /// A discounting policy without conditions would never discount.
    #[error("a discounting policy needs at least one condition")]
    NoConditions,

    /// The percentage is not a fraction between 0 and 1.
    #[error("discount percentage {0} is outside [0, 1]")]
    PercentageOutOfRange(Decimal),

    /// The flat discount is below zero.
    #[error("discount amount of {0} minor units is negative")]
    NegativeAmount(i64),
}

/// A discount that only applies when one of its conditions matches.
pub trait ConditionalDiscount<'a> {
    /// Conditions gating the discount
    fn conditions(&self) -> &DiscountConditions;

    /// Discount for a screening already known to be eligible.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the amount cannot be calculated.
    fn discount_amount(
        &self,
        screening: &Screening<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError>;

    /// Return whether any condition is satisfied by the screening.
    fn is_discountable(&self, screening: &Screening<'_>) -> bool {
        self.conditions().any_satisfied_by(screening)
    }

    /// Discount for a screening, or zero when no condition matches.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the amount cannot be calculated.
    fn calculate_discount_amount(
        &self,
        screening: &Screening<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        if self.is_discountable(screening) {
            self.discount_amount(screening)
        } else {
            Ok(zero(screening.movie_fee().currency()))
        }
    }
}

/// Discount policy enum
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountPolicy<'a> {
    /// Never discounts
    None(NoneDiscountPolicy),

    /// Flat amount off
    Amount(AmountDiscountPolicy<'a>),

    /// Fraction of the base fee off
    Percent(PercentDiscountPolicy),
}

impl<'a> DiscountPolicy<'a> {
    /// A policy that never discounts.
    pub fn none() -> Self {
        DiscountPolicy::None(NoneDiscountPolicy::new())
    }

    /// A flat amount off when any condition matches.
    ///
    /// # Errors
    ///
    /// See [`AmountDiscountPolicy::new`].
    pub fn amount(
        amount: Money<'a, Currency>,
        conditions: impl Into<DiscountConditions>,
    ) -> Result<Self, PolicyError> {
        AmountDiscountPolicy::new(amount, conditions).map(DiscountPolicy::Amount)
    }

    /// A percentage of the base fee off when any condition matches.
    ///
    /// # Errors
    ///
    /// See [`PercentDiscountPolicy::new`].
    pub fn percent(
        percentage: Percentage,
        conditions: impl Into<DiscountConditions>,
    ) -> Result<Self, PolicyError> {
        PercentDiscountPolicy::new(percentage, conditions).map(DiscountPolicy::Percent)
    }

    /// Return the conditions, or `None` for a policy that never discounts.
    pub fn conditions(&self) -> Option<&DiscountConditions> {
        match self {
            DiscountPolicy::None(_) => None,
            DiscountPolicy::Amount(amount) => Some(amount.conditions()),
            DiscountPolicy::Percent(percent) => Some(percent.conditions()),
        }
    }

    /// Return whether the screening is eligible for this policy's discount.
    pub fn is_discountable(&self, screening: &Screening<'_>) -> bool {
        match self {
            DiscountPolicy::None(_) => false,
            DiscountPolicy::Amount(amount) => amount.is_discountable(screening),
            DiscountPolicy::Percent(percent) => percent.is_discountable(screening),
        }
    }

    /// Calculate the amount to subtract from the base fee for a screening.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the amount cannot be represented in minor units.
    pub fn calculate_discount_amount(
        &self,
        screening: &Screening<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        match self {
            DiscountPolicy::None(none) => Ok(none.calculate_discount_amount(screening)),
            DiscountPolicy::Amount(amount) => amount.calculate_discount_amount(screening),
            DiscountPolicy::Percent(percent) => percent.calculate_discount_amount(screening),
        }
    }
}

impl Default for DiscountPolicy<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl From<NoneDiscountPolicy> for DiscountPolicy<'_> {
    fn from(policy: NoneDiscountPolicy) -> Self {
        DiscountPolicy::None(policy)
    }
}

impl<'a> From<AmountDiscountPolicy<'a>> for DiscountPolicy<'a> {
    fn from(policy: AmountDiscountPolicy<'a>) -> Self {
        DiscountPolicy::Amount(policy)
    }
}

impl From<PercentDiscountPolicy> for DiscountPolicy<'_> {
    fn from(policy: PercentDiscountPolicy) -> Self {
        DiscountPolicy::Percent(policy)
    }
}
