//! Discount Policy Fixtures

use decimal_percentage::Percentage;
use rusty_money::Money;
use serde::Deserialize;

use crate::{
    conditions::{DiscountCondition, DiscountConditions},
    fixtures::{FixtureError, conditions::ConditionFixture, movies::parse_price},
    policies::DiscountPolicy,
};

/// Discount policy configuration from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyFixture {
    /// Never discount
    None,

    /// Fixed amount off (e.g., "800 KRW")
    Amount {
        /// Discount amount string (e.g., "800 KRW")
        value: String,

        /// Conditions, any of which makes a screening eligible
        #[serde(default)]
        conditions: Vec<ConditionFixture>,
    },

    /// Percentage off (value between 0.0 and 1.0)
    Percent {
        /// Discount percentage as decimal (e.g., 0.1 for 10%)
        value: f64,

        /// Conditions, any of which makes a screening eligible
        #[serde(default)]
        conditions: Vec<ConditionFixture>,
    },
}

impl TryFrom<PolicyFixture> for DiscountPolicy<'static> {
    type Error = FixtureError;

    fn try_from(fixture: PolicyFixture) -> Result<Self, Self::Error> {
        match fixture {
            PolicyFixture::None => Ok(DiscountPolicy::none()),
            PolicyFixture::Amount { value, conditions } => {
                let (minor_units, currency) = parse_price(&value)?;

                Ok(DiscountPolicy::amount(
                    Money::from_minor(minor_units, currency),
                    try_into_conditions(conditions)?,
                )?)
            }
            PolicyFixture::Percent { value, conditions } => {
                if !value.is_finite() {
                    return Err(FixtureError::InvalidPercentage(value.to_string()));
                }

                Ok(DiscountPolicy::percent(
                    Percentage::from(value),
                    try_into_conditions(conditions)?,
                )?)
            }
        }
    }
}

fn try_into_conditions(
    conditions: Vec<ConditionFixture>,
) -> Result<DiscountConditions, FixtureError> {
    conditions
        .into_iter()
        .map(DiscountCondition::try_from)
        .collect()
}
