//! Period Condition
//!
//! A weekly time window, e.g. "Mondays between 10:00 and 12:00"

use jiff::civil::{Time, Weekday};
use tracing::warn;

use crate::screenings::Screening;

/// Satisfied when a screening starts on the given weekday within `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCondition {
    weekday: Weekday,
    start: Time,
    end: Time,
}

impl PeriodCondition {
    /// Create a new period condition. Both bounds are inclusive.
    pub fn new(weekday: Weekday, start: Time, end: Time) -> Self {
        if start > end {
            warn!(?weekday, %start, %end, "period condition window is empty and can never be satisfied");
        }

        Self {
            weekday,
            start,
            end,
        }
    }

    /// Return the weekday
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Return the start of the window
    pub fn start(&self) -> Time {
        self.start
    }

    /// Return the end of the window
    pub fn end(&self) -> Time {
        self.end
    }

    /// Return whether the screening starts inside the window.
    pub fn is_satisfied_by(&self, screening: &Screening<'_>) -> bool {
        let starts_at = screening.start_time();
        let time_of_day = starts_at.time();

        starts_at.weekday() == self.weekday && self.start <= time_of_day && self.end >= time_of_day
    }
}
