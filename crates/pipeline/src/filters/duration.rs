//! Filter constraining workout duration by goal.

use crate::filters::Threshold;
use crate::traits::Filter;
use data_loader::{FitnessRecord, Goal};

/// Keeps rows whose `Duration` satisfies the goal's bound.
///
/// Weight loss favours long sessions (>= 40), weight gain short ones (<= 40);
/// maintaining weight imposes no constraint.
pub struct DurationFilter {
    threshold: Threshold,
}

impl DurationFilter {
    pub const PIVOT_MINUTES: f64 = 40.0;

    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// The duration constraint for `goal`, if any
    pub fn for_goal(goal: Goal) -> Option<Self> {
        match goal {
            Goal::Loss => Some(Self::new(Threshold::AtLeast(Self::PIVOT_MINUTES))),
            Goal::Gain => Some(Self::new(Threshold::AtMost(Self::PIVOT_MINUTES))),
            Goal::Maintain => None,
        }
    }
}

impl Filter for DurationFilter {
    fn name(&self) -> &str {
        "DurationFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        rows.into_iter()
            .filter(|row| self.threshold.admits(row.duration))
            .collect()
    }
}
