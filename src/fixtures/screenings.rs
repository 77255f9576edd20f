//! Screening Fixtures

use jiff::civil::DateTime;
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for a screening schedule in YAML
#[derive(Debug, Deserialize)]
pub struct ScreeningsFixture {
    /// Screenings in schedule order
    pub screenings: Vec<ScreeningFixture>,
}

/// Screening fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ScreeningFixture {
    /// Key of the movie being screened
    pub movie: String,

    /// Sequence number within the day
    pub sequence: i32,

    /// Local start time (e.g., "2024-01-01T10:00")
    pub start: String,
}

impl ScreeningFixture {
    /// Parse the start time.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidTime`] if `start` is not a valid local datetime.
    pub fn start_time(&self) -> Result<DateTime, FixtureError> {
        self.start
            .parse::<DateTime>()
            .map_err(|error| FixtureError::InvalidTime(format!("{}: {error}", self.start)))
    }
}
