//! # Data Loader Crate
//!
//! This crate handles loading the flat fitness dataset the recommenders run on.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (FitnessRecord, FitnessDataset, categorical enums)
//! - **parser**: Parse the CSV file into Rust structs
//! - **index**: Load the file and build the goal index
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::FitnessDataset;
//! use std::path::Path;
//!
//! let dataset = FitnessDataset::load_from_file(Path::new("data/fitness_dataset.csv"))?;
//! let loss_rows = dataset.records_for_goal("Loss");
//! println!("{} rows target weight loss", loss_rows.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    columns,
    // Core types
    FitnessDataset,
    FitnessRecord,
    // Enums
    BmiCategory,
    DietType,
    FitnessLevel,
    Goal,
    MealType,
    UnknownCategory,
};
