//! Filter implementations for the recommendation pipelines.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category_match;
pub mod nutrient_ceiling;
pub mod intensity_band;
pub mod duration;
pub mod calorie_burn;

// Re-export for convenience
pub use category_match::{DietTypeFilter, GoalFilter, MealTypeFilter};
pub use nutrient_ceiling::{Nutrient, NutrientCeilingFilter};
pub use intensity_band::IntensityBandFilter;
pub use duration::DurationFilter;
pub use calorie_burn::CalorieBurnFilter;

/// A one-sided numeric bound.
///
/// Comparisons against `NaN` are always false, so a missing cell never
/// passes a bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// value < limit
    Below(f64),
    /// value <= limit
    AtMost(f64),
    /// value >= limit
    AtLeast(f64),
}

impl Threshold {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Threshold::Below(limit) => value < limit,
            Threshold::AtMost(limit) => value <= limit,
            Threshold::AtLeast(limit) => value >= limit,
        }
    }
}
