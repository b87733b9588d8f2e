use super::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::{FeatureScaler, FeatureVector, RegressionModel};
use crate::domain::prediction::round_price;
use ndarray::Array2;
use tracing::debug;

/// One bank's scaler and model, loaded for a single prediction.
pub struct InferencePipeline {
    scaler: FeatureScaler,
    model: RegressionModel,
}

impl InferencePipeline {
    pub fn new(scaler: FeatureScaler, model: RegressionModel) -> Self {
        Self { scaler, model }
    }

    /// Single observation as a `1 x n` matrix, the shape the artifacts were fitted on.
    fn to_row_matrix(features: &FeatureVector) -> Result<Array2<f64>, PredictionError> {
        let values = features.to_vec();
        Array2::from_shape_vec((1, values.len()), values).map_err(|e| {
            PredictionError::Inference {
                reason: format!("Reshape failed: {}", e),
            }
        })
    }
}

impl PricePredictor for InferencePipeline {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let row = Self::to_row_matrix(features)?;
        let scaled = self.scaler.transform(&row)?;
        let predictions = self.model.predict(&scaled)?;

        let raw = *predictions
            .first()
            .ok_or_else(|| PredictionError::Inference {
                reason: "Model returned no prediction".to_string(),
            })?;

        if !raw.is_finite() {
            return Err(PredictionError::Inference {
                reason: format!("Model produced a non-finite prediction ({})", raw),
            });
        }

        debug!(raw, model = self.model.name(), "Raw model output");
        Ok(round_price(raw))
    }

    fn name(&self) -> &str {
        self.model.name()
    }
}
