//! Movies

use jiff::SignedDuration;
use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    discounts::DiscountError,
    policies::{AmountDiscountPolicy, DiscountPolicy},
    screenings::Screening,
};

new_key_type! {
    /// Movie Key
    pub struct MovieKey;
}

/// Errors raised when a movie would be priced inconsistently.
#[derive(Debug, Error, PartialEq)]
pub enum MovieError {
    /// The base fee is below zero.
    #[error("movie fee of {0} minor units is negative")]
    NegativeFee(i64),

    /// The flat discount is in a different currency from the base fee.
    #[error("discount currency {actual} does not match fee currency {expected}")]
    CurrencyMismatch {
        /// Fee currency code
        expected: &'static str,

        /// Discount currency code
        actual: &'static str,
    },

    /// The flat discount would take the fee below zero.
    #[error("discount of {discount} minor units exceeds fee of {fee} minor units")]
    DiscountExceedsFee {
        /// Discount in minor units
        discount: i64,

        /// Fee in minor units
        fee: i64,
    },
}

/// A movie and the policy used to price its screenings
#[derive(Debug, Clone, PartialEq)]
pub struct Movie<'a> {
    title: String,
    running_time: SignedDuration,
    fee: Money<'a, Currency>,
    policy: DiscountPolicy<'a>,
}

impl<'a> Movie<'a> {
    /// Create a new movie.
    ///
    /// # Errors
    ///
    /// - [`MovieError::NegativeFee`]: `fee` is below zero.
    /// - [`MovieError::CurrencyMismatch`]: a flat discount is not in the fee currency.
    /// - [`MovieError::DiscountExceedsFee`]: a flat discount is larger than `fee`.
    pub fn new(
        title: impl Into<String>,
        running_time: SignedDuration,
        fee: Money<'a, Currency>,
        policy: DiscountPolicy<'a>,
    ) -> Result<Self, MovieError> {
        if fee.to_minor_units() < 0 {
            return Err(MovieError::NegativeFee(fee.to_minor_units()));
        }

        check_policy(&fee, &policy)?;

        Ok(Self {
            title: title.into(),
            running_time,
            fee,
            policy,
        })
    }

    /// Return the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Return the running time
    pub fn running_time(&self) -> SignedDuration {
        self.running_time
    }

    /// Return the base fee
    pub fn fee(&self) -> Money<'a, Currency> {
        self.fee
    }

    /// Return the discount policy
    pub fn policy(&self) -> &DiscountPolicy<'a> {
        &self.policy
    }

    /// Replace the discount policy.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Movie::new`]; the current policy is kept on error.
    pub fn change_policy(&mut self, policy: DiscountPolicy<'a>) -> Result<(), MovieError> {
        check_policy(&self.fee, &policy)?;

        info!(title = %self.title, ?policy, "changed discount policy");

        self.policy = policy;

        Ok(())
    }

    /// Calculate the fee for one ticket to a screening.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the discount cannot be calculated or subtracted.
    pub fn calculate_fee(
        &self,
        screening: &Screening<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        let discount = self.policy.calculate_discount_amount(screening)?;

        debug!(
            title = %self.title,
            sequence = screening.sequence(),
            fee = self.fee.to_minor_units(),
            discount = discount.to_minor_units(),
            "calculated screening fee"
        );

        Ok(self.fee.sub(discount)?)
    }
}

/// Checks the parts of a policy that depend on the fee it discounts.
fn check_policy(fee: &Money<'_, Currency>, policy: &DiscountPolicy<'_>) -> Result<(), MovieError> {
    match policy {
        DiscountPolicy::Amount(amount) => check_amount(fee, amount),
        DiscountPolicy::None(_) | DiscountPolicy::Percent(_) => Ok(()),
    }
}

fn check_amount(
    fee: &Money<'_, Currency>,
    policy: &AmountDiscountPolicy<'_>,
) -> Result<(), MovieError> {
    let discount = policy.amount();

    if discount.currency() != fee.currency() {
        return Err(MovieError::CurrencyMismatch {
            expected: fee.currency().iso_alpha_code,
            actual: discount.currency().iso_alpha_code,
        });
    }

    if discount.to_minor_units() > fee.to_minor_units() {
        return Err(MovieError::DiscountExceedsFee {
            discount: discount.to_minor_units(),
            fee: fee.to_minor_units(),
        });
    }

    Ok(())
}
