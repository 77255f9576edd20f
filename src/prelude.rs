//! Box Office prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    conditions::{DiscountCondition, DiscountConditions, PeriodCondition, SequenceCondition},
    discounts::DiscountError,
    fixtures::{Fixture, FixtureError},
    movies::{Movie, MovieError, MovieKey},
    policies::{
        AmountDiscountPolicy, ConditionalDiscount, DiscountPolicy, NoneDiscountPolicy,
        PercentDiscountPolicy, PolicyError,
    },
    pricing::PricingError,
    reservations::{Customer, Reservation, ReservationError},
    screenings::Screening,
};
