//! Box Office
//!
//! Box Office prices movie screenings. Each movie carries a discount policy
//! (none, a flat amount off, or a percentage off) gated by conditions on the
//! screening's start time or sequence number; a reservation multiplies the
//! resulting ticket fee by the audience count.

pub mod conditions;
pub mod discounts;
pub mod fixtures;
pub mod movies;
pub mod policies;
pub mod prelude;
pub mod pricing;
pub mod reservations;
pub mod screenings;
pub mod utils;
