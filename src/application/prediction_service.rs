//! Prediction boundary.
//!
//! Runs feature extraction, artifact resolution and inference for one
//! request and folds every failure into an in-band error result.

use crate::application::ml::inference_pipeline::InferencePipeline;
use crate::application::ml::predictor::PricePredictor;
use crate::domain::bank::BankCode;
use crate::domain::errors::PredictionError;
use crate::domain::ml::FeatureRecord;
use crate::domain::ports::ArtifactStore;
use crate::domain::prediction::PredictionResult;
use serde_json::Value;
use tracing::{info, warn};

pub struct PredictionService<S: ArtifactStore> {
    store: S,
}

impl<S: ArtifactStore> PredictionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Predicts the price for `bank_code`. Never fails: errors become
    /// `status: "error"` results.
    pub fn predict(&self, bank_code: &str, payload: &Value) -> PredictionResult {
        match self.try_predict(bank_code, payload) {
            Ok(price) => {
                info!("Predicted price for {}: {}", bank_code, price);
                PredictionResult::success(price)
            }
            Err(e) => {
                warn!(kind = %e.kind(), "Prediction for {} failed: {}", bank_code, e);
                PredictionResult::from_error(&e)
            }
        }
    }

    pub fn try_predict(&self, bank_code: &str, payload: &Value) -> Result<f64, PredictionError> {
        let features = FeatureRecord::from_payload(payload)?.to_vector();

        let bank = BankCode::parse(bank_code)?;
        self.store.resolve(&bank)?;
        let scaler = self.store.load_scaler(&bank)?;
        let model = self.store.load_model(&bank)?;

        InferencePipeline::new(scaler, model).predict(&features)
    }
}
