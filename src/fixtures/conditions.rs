//! Discount Condition Fixtures

use jiff::civil::{Time, Weekday};
use serde::Deserialize;

use crate::{
    conditions::{DiscountCondition, PeriodCondition, SequenceCondition},
    fixtures::FixtureError,
};

/// Discount condition configuration from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionFixture {
    /// Weekly time window, bounds inclusive
    Period {
        /// Day of the week
        day: WeekdayFixture,

        /// Window start (e.g., "10:00")
        start: String,

        /// Window end (e.g., "11:59")
        end: String,
    },

    /// Exact sequence number
    Sequence {
        /// Sequence number to match
        sequence: i32,
    },
}

/// Day of the week in YAML fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayFixture {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl From<WeekdayFixture> for Weekday {
    fn from(day: WeekdayFixture) -> Self {
        match day {
            WeekdayFixture::Monday => Weekday::Monday,
            WeekdayFixture::Tuesday => Weekday::Tuesday,
            WeekdayFixture::Wednesday => Weekday::Wednesday,
            WeekdayFixture::Thursday => Weekday::Thursday,
            WeekdayFixture::Friday => Weekday::Friday,
            WeekdayFixture::Saturday => Weekday::Saturday,
            WeekdayFixture::Sunday => Weekday::Sunday,
        }
    }
}

impl TryFrom<ConditionFixture> for DiscountCondition {
    type Error = FixtureError;

    fn try_from(fixture: ConditionFixture) -> Result<Self, Self::Error> {
        match fixture {
            ConditionFixture::Period { day, start, end } => Ok(DiscountCondition::Period(
                PeriodCondition::new(day.into(), parse_time(&start)?, parse_time(&end)?),
            )),
            ConditionFixture::Sequence { sequence } => {
                Ok(DiscountCondition::Sequence(SequenceCondition::new(sequence)))
            }
        }
    }
}

/// Parse a time of day such as "10:00" or "23:59:59".
///
/// # Errors
///
/// Returns [`FixtureError::InvalidTime`] if the string is not a valid time of day.
pub fn parse_time(value: &str) -> Result<Time, FixtureError> {
    value
        .parse::<Time>()
        .map_err(|error| FixtureError::InvalidTime(format!("{value}: {error}")))
}
