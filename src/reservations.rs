//! Reservations

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{discounts::DiscountError, pricing::PricingError, screenings::Screening};

/// Errors that can occur while reserving a screening.
#[derive(Debug, Error, PartialEq)]
pub enum ReservationError {
    /// Audience count below zero.
    #[error("audience count {0} is negative")]
    NegativeAudience(i64),

    /// The per-ticket fee could not be calculated.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// The total fee could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// The person making a reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
}

impl Customer {
    /// Create a new customer.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Return the customer's name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A customer's booking for a screening.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation<'a> {
    customer: Customer,
    screening: Screening<'a>,
    fee: Money<'a, Currency>,
    audience_count: i64,
}

impl<'a> Reservation<'a> {
    /// Create a new reservation with the given details.
    pub fn new(
        customer: Customer,
        screening: Screening<'a>,
        fee: Money<'a, Currency>,
        audience_count: i64,
    ) -> Self {
        Self {
            customer,
            screening,
            fee,
            audience_count,
        }
    }

    /// Customer who made the reservation
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Reserved screening
    pub fn screening(&self) -> &Screening<'a> {
        &self.screening
    }

    /// Total fee for all seats
    pub fn fee(&self) -> Money<'a, Currency> {
        self.fee
    }

    /// Number of seats reserved
    pub fn audience_count(&self) -> i64 {
        self.audience_count
    }

    /// Fee per seat, or zero for an empty reservation.
    pub fn per_ticket_fee(&self) -> Money<'a, Currency> {
        let minor = self
            .fee
            .to_minor_units()
            .checked_div(self.audience_count)
            .unwrap_or(0);

        Money::from_minor(minor, self.fee.currency())
    }
}
