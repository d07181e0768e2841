//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to dataset rows.

use data_loader::FitnessRecord;

/// Core trait for filtering dataset rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across request handlers
/// - Filters take ownership of the row list and return the kept rows, in order
/// - Rows are borrowed from the dataset, so filtering never copies records
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of rows, preserving their order.
    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord>;
}
