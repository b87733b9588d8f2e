//! Fitted regression estimators producing a price from a scaled feature row.

use crate::domain::errors::PredictionError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fmt;

pub type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// A fitted estimator, persisted as the `fitted` body of a model artifact.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    /// `coefficients · x + intercept`
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    /// smartcore forest with the column count it was fitted on.
    RandomForest {
        n_features: usize,
        forest: ForestRegressor,
    },
}

impl RegressionModel {
    pub fn name(&self) -> &'static str {
        match self {
            RegressionModel::Linear { .. } => "Linear Regression",
            RegressionModel::RandomForest { .. } => "SmartCore Random Forest",
        }
    }

    /// Number of input columns the estimator was fitted on.
    pub fn n_features(&self) -> usize {
        match self {
            RegressionModel::Linear { coefficients, .. } => coefficients.len(),
            RegressionModel::RandomForest { n_features, .. } => *n_features,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            RegressionModel::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.is_empty() {
                    return Err("linear model has no coefficients".to_string());
                }
                if let Some(idx) = coefficients.iter().position(|c| !c.is_finite()) {
                    return Err(format!("coefficients[{}] is not finite", idx));
                }
                if !intercept.is_finite() {
                    return Err("intercept is not finite".to_string());
                }
                Ok(())
            }
            RegressionModel::RandomForest { n_features, .. } => {
                if *n_features == 0 {
                    return Err("random forest records zero input features".to_string());
                }
                Ok(())
            }
        }
    }

    /// Predicts one value per row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<f64>, PredictionError> {
        let expected = self.n_features();
        if x.ncols() != expected {
            return Err(PredictionError::DimensionMismatch {
                stage: "model",
                expected,
                actual: x.ncols(),
            });
        }

        match self {
            RegressionModel::Linear {
                coefficients,
                intercept,
            } => {
                let weights = Array1::from(coefficients.clone());
                Ok((x.dot(&weights) + *intercept).to_vec())
            }
            RegressionModel::RandomForest { forest, .. } => {
                let rows: Vec<Vec<f64>> = x.outer_iter().map(|row| row.to_vec()).collect();
                let matrix =
                    DenseMatrix::from_2d_vec(&rows).map_err(|e| PredictionError::Inference {
                        reason: format!("Matrix creation failed: {}", e),
                    })?;

                forest
                    .predict(&matrix)
                    .map_err(|e| PredictionError::Inference {
                        reason: format!("Prediction failed: {}", e),
                    })
            }
        }
    }
}

impl fmt::Debug for RegressionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionModel::Linear {
                coefficients,
                intercept,
            } => f
                .debug_struct("Linear")
                .field("coefficients", coefficients)
                .field("intercept", intercept)
                .finish(),
            RegressionModel::RandomForest { n_features, .. } => f
                .debug_struct("RandomForest")
                .field("n_features", n_features)
                .finish(),
        }
    }
}
