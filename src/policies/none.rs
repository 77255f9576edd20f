//! None Discount Policy

use rusty_money::{Money, iso::Currency};

use crate::{pricing::zero, screenings::Screening};

/// A policy that never discounts, whatever the screening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoneDiscountPolicy;

impl NoneDiscountPolicy {
    /// Create a new policy.
    pub fn new() -> Self {
        Self
    }

    /// Always zero, in the currency of the screened movie's fee.
    pub fn calculate_discount_amount<'a>(&self, screening: &Screening<'a>) -> Money<'a, Currency> {
        zero(screening.movie_fee().currency())
    }
}
