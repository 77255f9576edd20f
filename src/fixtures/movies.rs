//! Movie Fixtures

use jiff::SignedDuration;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, policies::PolicyFixture},
    movies::Movie,
    policies::DiscountPolicy,
};

/// Wrapper for movies in YAML
#[derive(Debug, Deserialize)]
pub struct MoviesFixture {
    /// Map of movie key -> movie fixture
    pub movies: FxHashMap<String, MovieFixture>,
}

/// Movie fixture from YAML
#[derive(Debug, Deserialize)]
pub struct MovieFixture {
    /// Movie title
    pub title: String,

    /// Running time in minutes
    pub running_time: u32,

    /// Base fee (e.g. "10000 KRW")
    pub fee: String,

    /// Discount policy; movies without one are never discounted
    #[serde(default)]
    pub policy: Option<PolicyFixture>,
}

impl TryFrom<MovieFixture> for Movie<'static> {
    type Error = FixtureError;

    fn try_from(fixture: MovieFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.fee)?;

        let policy = match fixture.policy {
            Some(policy) => DiscountPolicy::try_from(policy)?,
            None => DiscountPolicy::none(),
        };

        Ok(Movie::new(
            fixture.title,
            SignedDuration::from_mins(i64::from(fixture.running_time)),
            Money::from_minor(minor_units, currency),
            policy,
        )?)
    }
}

/// Parse a price string such as "12.50 GBP" into minor units and a currency.
///
/// # Errors
///
/// - [`FixtureError::InvalidPrice`]: the string is not "<amount> <code>", or the amount is not a
///   whole number of minor units.
/// - [`FixtureError::UnknownCurrency`]: the code is not an ISO currency.
pub fn parse_price(value: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = value.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(value.to_string()));
    };

    let currency = iso::find(code).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|error| FixtureError::InvalidPrice(format!("{value}: {error}")))?;

    let scale = 10_i64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or_else(|| FixtureError::InvalidPrice(value.to_string()))?;

    let minor_units = amount
        .checked_mul(scale)
        .filter(|minor| minor.fract().is_zero())
        .and_then(|minor| minor.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(value.to_string()))?;

    Ok((minor_units, currency))
}
