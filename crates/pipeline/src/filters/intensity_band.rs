//! Filter selecting exercises whose intensity suits a fitness level.
//!
//! Bands partition the 1-10 intensity scale with no overlap:
//! - Beginner: intensity <= 4
//! - Intermediate: 4 < intensity <= 7
//! - Advanced: intensity > 7

use crate::traits::Filter;
use data_loader::{FitnessLevel, FitnessRecord};

/// Keeps rows whose `Exercise Intensity` falls in the level's band.
pub struct IntensityBandFilter {
    level: FitnessLevel,
}

impl IntensityBandFilter {
    pub const BEGINNER_MAX: f64 = 4.0;
    pub const INTERMEDIATE_MAX: f64 = 7.0;

    pub fn new(level: FitnessLevel) -> Self {
        Self { level }
    }

    /// Whether `intensity` belongs to this filter's band
    pub fn contains(&self, intensity: f64) -> bool {
        match self.level {
            FitnessLevel::Beginner => intensity <= Self::BEGINNER_MAX,
            FitnessLevel::Intermediate => {
                intensity > Self::BEGINNER_MAX && intensity <= Self::INTERMEDIATE_MAX
            }
            FitnessLevel::Advanced => intensity > Self::INTERMEDIATE_MAX,
        }
    }
}

impl Filter for IntensityBandFilter {
    fn name(&self) -> &str {
        "IntensityBandFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        rows.into_iter()
            .filter(|row| self.contains(row.intensity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let beginner = IntensityBandFilter::new(FitnessLevel::Beginner);
        let intermediate = IntensityBandFilter::new(FitnessLevel::Intermediate);
        let advanced = IntensityBandFilter::new(FitnessLevel::Advanced);

        // 4 is Beginner only, 7 is Intermediate only
        assert!(beginner.contains(4.0));
        assert!(!intermediate.contains(4.0));
        assert!(intermediate.contains(7.0));
        assert!(!advanced.contains(7.0));
        assert!(advanced.contains(7.5));
    }

    #[test]
    fn test_bands_partition_scale() {
        let bands: Vec<_> = FitnessLevel::ALL
            .iter()
            .map(|&level| IntensityBandFilter::new(level))
            .collect();

        for step in 0..=40 {
            let intensity = step as f64 * 0.25 + 0.5;
            let hits = bands.iter().filter(|b| b.contains(intensity)).count();
            assert_eq!(hits, 1, "intensity {intensity} should be in exactly one band");
        }
    }

    #[test]
    fn test_nan_in_no_band() {
        for &level in FitnessLevel::ALL {
            assert!(!IntensityBandFilter::new(level).contains(f64::NAN));
        }
    }
}
