//! Quote Example
//!
//! Loads a fixture set and prints the fee for every scheduled screening.
//!
//! Use `-f` to load a fixture set by name
//! Use `-a` to specify the number of tickets per screening
//!
//! Run with: `cargo run --example quote -- -f weekly -a 3`

use anyhow::Result;
use clap::Parser;

use box_office::{fixtures::Fixture, reservations::Customer, utils::QuoteArgs};

/// Quote Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = QuoteArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    for screening in fixture.screenings()? {
        let reservation = screening.reserve(Customer::new("walk-in"), args.audience)?;

        println!(
            "{:<12} {} #{:<3} {:>12} x {} = {}",
            screening.movie().title(),
            screening.start_time(),
            screening.sequence(),
            screening.movie().calculate_fee(&screening)?,
            reservation.audience_count(),
            reservation.fee(),
        );
    }

    Ok(())
}
