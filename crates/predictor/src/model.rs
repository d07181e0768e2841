//! Regression models exported to JSON.
//!
//! Two model families are supported:
//! - **linear**: one coefficient row and intercept per output
//! - **forest**: an ensemble of binary regression trees whose leaf values
//!   are averaged per output
//!
//! Both predict a single sample at a time and may have several outputs
//! (the macronutrient model predicts protein, carbohydrates and fat).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear(LinearModel),
    Forest(ForestModel),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// `coefficients[output][feature]`
    pub coefficients: Vec<Vec<f64>>,
    /// One intercept per output
    pub intercepts: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub n_outputs: usize,
    pub trees: Vec<DecisionTree>,
}

/// A tree stored as a flat node array; node 0 is the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go `left` when `features[feature] <= threshold`, otherwise `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { value: Vec<f64> },
}

impl RegressionModel {
    /// Number of values one prediction yields
    pub fn n_outputs(&self) -> usize {
        match self {
            RegressionModel::Linear(m) => m.intercepts.len(),
            RegressionModel::Forest(m) => m.n_outputs,
        }
    }

    /// Check the model's internal shape against the feature count it will be fed.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        match self {
            RegressionModel::Linear(m) => m.validate(n_features),
            RegressionModel::Forest(m) => m.validate(n_features),
        }
    }

    /// Predict every output for a single sample
    pub fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        debug!("Running inference on {} features", features.len());
        let outputs = match self {
            RegressionModel::Linear(m) => m.predict(features)?,
            RegressionModel::Forest(m) => m.predict(features)?,
        };

        if outputs.len() != self.n_outputs() {
            return Err(ModelError::OutputCountMismatch {
                expected: self.n_outputs(),
                found: outputs.len(),
            });
        }
        Ok(outputs)
    }
}

impl LinearModel {
    fn validate(&self, n_features: usize) -> Result<()> {
        if self.coefficients.len() != self.intercepts.len() {
            return Err(ModelError::InvalidModel(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        if self.intercepts.is_empty() {
            return Err(ModelError::InvalidModel("linear model has no outputs".into()));
        }
        for row in &self.coefficients {
            if row.len() != n_features {
                return Err(ModelError::FeatureCountMismatch {
                    expected: row.len(),
                    found: n_features,
                });
            }
        }
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                if row.len() != features.len() {
                    return Err(ModelError::FeatureCountMismatch {
                        expected: row.len(),
                        found: features.len(),
                    });
                }
                Ok(intercept + row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>())
            })
            .collect()
    }
}

impl ForestModel {
    fn validate(&self, n_features: usize) -> Result<()> {
        if self.trees.is_empty() {
            return Err(ModelError::InvalidModel("forest has no trees".into()));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features, self.n_outputs)
                .map_err(|reason| ModelError::InvalidModel(format!("tree {idx}: {reason}")))?;
        }
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        if self.trees.is_empty() {
            return Err(ModelError::InvalidModel("forest has no trees".into()));
        }

        let mut totals = vec![0.0; self.n_outputs];
        for tree in &self.trees {
            let leaf = tree.leaf_for(features)?;
            if leaf.len() != self.n_outputs {
                return Err(ModelError::OutputCountMismatch {
                    expected: self.n_outputs,
                    found: leaf.len(),
                });
            }
            for (total, value) in totals.iter_mut().zip(leaf) {
                *total += value;
            }
        }

        let count = self.trees.len() as f64;
        Ok(totals.into_iter().map(|t| t / count).collect())
    }
}

impl DecisionTree {
    fn validate(&self, n_features: usize, n_outputs: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split { feature, left, right, .. } => {
                    if *feature >= n_features {
                        return Err(format!("node {idx} splits on feature {feature} of {n_features}"));
                    }
                    // Children always come after their parent, which rules out cycles
                    for child in [left, right] {
                        if *child <= idx || *child >= self.nodes.len() {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_outputs {
                        return Err(format!("leaf {idx} has {} values, expected {n_outputs}", value.len()));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to the leaf `features` falls in
    fn leaf_for(&self, features: &[f64]) -> Result<&[f64]> {
        let mut idx = 0;
        // A well-formed path visits each node at most once
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(value.as_slice()),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features.get(*feature).ok_or(ModelError::FeatureCountMismatch {
                        expected: feature + 1,
                        found: features.len(),
                    })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::InvalidModel(format!("dangling node index {idx}")));
                }
            }
        }
        Err(ModelError::InvalidModel("tree path does not reach a leaf".into()))
    }
}
