//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use data_loader::FitnessRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Every filter sees the output of the previous one, so the pipeline keeps
/// exactly the rows satisfying all filters (a conjunction), in input order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GoalFilter::new(Goal::Loss))
///     .add_filter(NutrientCeilingFilter::new(Nutrient::Calories, 0.35))
///     .add_optional_filter(DurationFilter::for_goal(Goal::Loss));
///
/// let kept = pipeline.apply(dataset.records().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when a constraint applies.
    ///
    /// Constraint constructors return `None` for selections that impose no
    /// restriction (e.g. no duration limit when maintaining weight).
    pub fn add_optional_filter(self, filter: Option<impl Filter + 'static>) -> Self {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the rows.
    pub fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        let mut current = rows;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GoalFilter, IntensityBandFilter};
    use crate::test_support::record;
    use data_loader::{FitnessLevel, Goal};

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let rows = [record("Loss", "A"), record("Gain", "B")];

        let filtered = pipeline.apply(rows.iter().collect());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(GoalFilter::new(Goal::Gain));
        let rows = [record("Loss", "A"), record("Gain", "B")];

        let filtered = pipeline.apply(rows.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].food_item, "B");
    }

    #[test]
    fn test_optional_filter_skipped() {
        let pipeline = FilterPipeline::new()
            .add_filter(IntensityBandFilter::new(FitnessLevel::Beginner))
            .add_optional_filter(None::<GoalFilter>);

        assert_eq!(pipeline.filter_names(), vec!["IntensityBandFilter"]);
    }
}
