use crate::domain::errors::PredictionError;
use crate::domain::ml::FeatureVector;

/// Interface for price regression pipelines
pub trait PricePredictor {
    /// Predict a price, already rounded for emission
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
