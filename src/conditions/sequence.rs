//! Sequence Condition

use crate::screenings::Screening;

/// Satisfied when a screening has exactly the given sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCondition {
    sequence: i32,
}

impl SequenceCondition {
    /// Create a new sequence condition.
    pub fn new(sequence: i32) -> Self {
        Self { sequence }
    }

    /// Return the target sequence number
    pub fn sequence(&self) -> i32 {
        self.sequence
    }

    /// Return whether the screening has the target sequence number.
    pub fn is_satisfied_by(&self, screening: &Screening<'_>) -> bool {
        screening.is_sequence(self.sequence)
    }
}
