//! Building the FitnessDataset from the dataset file.

use crate::error::Result;
use crate::parser;
use crate::types::FitnessDataset;
use std::path::Path;
use std::time::Instant;
use tracing::info;

impl FitnessDataset {
    /// Load the dataset from a CSV file.
    ///
    /// This is the main entry point for loading data. The returned dataset
    /// is meant to be wrapped in an `Arc` and shared read-only.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading fitness dataset from {:?}", path);
        let start = Instant::now();

        let records = parser::parse_dataset(path)?;
        let dataset = FitnessDataset::from_records(records);

        info!(
            "Loaded {} records across {} goals in {:.2?}",
            dataset.len(),
            dataset.goal_count(),
            start.elapsed()
        );
        Ok(dataset)
    }
}
