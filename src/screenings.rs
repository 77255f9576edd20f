//! Screenings

use jiff::civil::DateTime;
use rusty_money::{Money, iso::Currency};
use tracing::info;

use crate::{
    movies::Movie,
    pricing::times,
    reservations::{Customer, Reservation, ReservationError},
};

/// One scheduled showing of a movie.
///
/// Screenings never change once built; rescheduling produces a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screening<'a> {
    movie: &'a Movie<'a>,
    sequence: i32,
    start_time: DateTime,
}

impl<'a> Screening<'a> {
    /// Create a new screening of `movie`.
    pub fn new(movie: &'a Movie<'a>, sequence: i32, start_time: DateTime) -> Self {
        Self {
            movie,
            sequence,
            start_time,
        }
    }

    /// Return the movie being screened
    pub fn movie(&self) -> &'a Movie<'a> {
        self.movie
    }

    /// Return the sequence number within the day's schedule
    pub fn sequence(&self) -> i32 {
        self.sequence
    }

    /// Return whether this screening has the given sequence number.
    pub fn is_sequence(&self, sequence: i32) -> bool {
        self.sequence == sequence
    }

    /// Return when the screening starts
    pub fn start_time(&self) -> DateTime {
        self.start_time
    }

    /// Return the movie's undiscounted fee
    pub fn movie_fee(&self) -> Money<'a, Currency> {
        self.movie.fee()
    }

    /// The same screening moved to a new start time.
    #[must_use]
    pub fn rescheduled(&self, start_time: DateTime) -> Self {
        Self {
            start_time,
            ..*self
        }
    }

    /// The same screening with a new sequence number.
    #[must_use]
    pub fn with_sequence(&self, sequence: i32) -> Self {
        Self { sequence, ..*self }
    }

    /// Calculate the total fee for `audience_count` tickets.
    ///
    /// # Errors
    ///
    /// - [`ReservationError::NegativeAudience`]: `audience_count` is below zero.
    /// - [`ReservationError::Discount`]: the per-ticket fee could not be calculated.
    /// - [`ReservationError::Pricing`]: the total overflows.
    pub fn calculate_fee(&self, audience_count: i64) -> Result<Money<'a, Currency>, ReservationError> {
        if audience_count < 0 {
            return Err(ReservationError::NegativeAudience(audience_count));
        }

        let per_ticket = self.movie.calculate_fee(self)?;

        Ok(times(&per_ticket, audience_count)?)
    }

    /// Reserve `audience_count` seats for a customer.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Screening::calculate_fee`].
    pub fn reserve(
        &self,
        customer: Customer,
        audience_count: i64,
    ) -> Result<Reservation<'a>, ReservationError> {
        let fee = self.calculate_fee(audience_count)?;

        info!(
            title = %self.movie.title(),
            sequence = self.sequence,
            start_time = %self.start_time,
            customer = %customer.name(),
            audience_count,
            fee = fee.to_minor_units(),
            "reserved screening"
        );

        Ok(Reservation::new(customer, *self, fee, audience_count))
    }
}
