//! Discount Conditions
//!
//! Predicates deciding whether a screening is eligible for a discount at all.
//! A policy holding several conditions discounts when any one of them matches.

use smallvec::SmallVec;

use crate::screenings::Screening;

pub mod period;
pub mod sequence;

pub use period::PeriodCondition;
pub use sequence::SequenceCondition;

/// Discount condition enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountCondition {
    /// Screening starts within a weekly time window
    Period(PeriodCondition),

    /// Screening has a specific sequence number
    Sequence(SequenceCondition),
}

impl DiscountCondition {
    /// Return whether the screening satisfies this condition.
    pub fn is_satisfied_by(&self, screening: &Screening<'_>) -> bool {
        match self {
            DiscountCondition::Period(period) => period.is_satisfied_by(screening),
            DiscountCondition::Sequence(sequence) => sequence.is_satisfied_by(screening),
        }
    }
}

impl From<PeriodCondition> for DiscountCondition {
    fn from(condition: PeriodCondition) -> Self {
        DiscountCondition::Period(condition)
    }
}

impl From<SequenceCondition> for DiscountCondition {
    fn from(condition: SequenceCondition) -> Self {
        DiscountCondition::Sequence(condition)
    }
}

/// Ordered collection of conditions, matched with logical OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountConditions(SmallVec<[DiscountCondition; 2]>);

impl DiscountConditions {
    /// Create an empty condition list.
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Return whether at least one condition is satisfied by the screening.
    ///
    /// An empty list is never satisfied.
    pub fn any_satisfied_by(&self, screening: &Screening<'_>) -> bool {
        self.0
            .iter()
            .any(|condition| condition.is_satisfied_by(screening))
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no conditions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the conditions in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &DiscountCondition> {
        self.0.iter()
    }
}

impl<C: Into<DiscountCondition>> FromIterator<C> for DiscountConditions {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<DiscountCondition>, const N: usize> From<[C; N]> for DiscountConditions {
    fn from(conditions: [C; N]) -> Self {
        conditions.into_iter().collect()
    }
}
