//! Fitted feature transforms applied before inference.

use crate::domain::errors::PredictionError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// A fitted feature transform, persisted as the `fitted` body of a scaler artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureScaler {
    /// `(x - mean) / scale`. A missing vector skips that step.
    Standard {
        #[serde(default)]
        mean: Option<Vec<f64>>,
        #[serde(default)]
        scale: Option<Vec<f64>>,
    },
    /// `x * scale + min`.
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl FeatureScaler {
    /// Number of input columns the transform was fitted on, if it records one.
    pub fn n_features(&self) -> Option<usize> {
        match self {
            FeatureScaler::Standard { mean, scale } => {
                mean.as_ref().or(scale.as_ref()).map(|v| v.len())
            }
            FeatureScaler::MinMax { min, .. } => Some(min.len()),
        }
    }

    /// Checks the fitted parameters are internally consistent.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            FeatureScaler::Standard { mean, scale } => {
                if let (Some(mean), Some(scale)) = (mean, scale) {
                    if mean.len() != scale.len() {
                        return Err(format!(
                            "mean has {} entries but scale has {}",
                            mean.len(),
                            scale.len()
                        ));
                    }
                }
                if let Some(mean) = mean {
                    ensure_finite("mean", mean)?;
                }
                if let Some(scale) = scale {
                    ensure_finite("scale", scale)?;
                    if let Some(idx) = scale.iter().position(|s| *s == 0.0) {
                        return Err(format!("scale[{}] is zero", idx));
                    }
                }
                Ok(())
            }
            FeatureScaler::MinMax { min, scale } => {
                if min.len() != scale.len() {
                    return Err(format!(
                        "min has {} entries but scale has {}",
                        min.len(),
                        scale.len()
                    ));
                }
                ensure_finite("min", min)?;
                ensure_finite("scale", scale)
            }
        }
    }

    /// Applies the transform to every row of `x`.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictionError> {
        if let Some(expected) = self.n_features() {
            if x.ncols() != expected {
                return Err(PredictionError::DimensionMismatch {
                    stage: "scaler",
                    expected,
                    actual: x.ncols(),
                });
            }
        }

        match self {
            FeatureScaler::Standard { mean, scale } => {
                let mut out = x.to_owned();
                if let Some(mean) = mean {
                    out = &out - &Array1::from(mean.clone());
                }
                if let Some(scale) = scale {
                    out = &out / &Array1::from(scale.clone());
                }
                Ok(out)
            }
            FeatureScaler::MinMax { min, scale } => {
                let scaled = x * &Array1::from(scale.clone());
                Ok(&scaled + &Array1::from(min.clone()))
            }
        }
    }
}

fn ensure_finite(name: &str, values: &[f64]) -> Result<(), String> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(format!("{}[{}] is not finite", name, idx)),
        None => Ok(()),
    }
}
