//! Utils

use clap::Parser;

/// Arguments for the quote demo
#[derive(Debug, Parser)]
pub struct QuoteArgs {
    /// Fixture set to load movies & screenings from
    #[clap(short, long, default_value = "weekly")]
    pub fixture: String,

    /// Number of tickets to quote for each screening
    #[clap(short, long, default_value_t = 1)]
    pub audience: i64,
}
