use crate::domain::errors::{ErrorKind, PredictionError};
use serde::{Deserialize, Serialize};

/// Decimal places kept in an emitted price.
pub const PRICE_DECIMALS: i32 = 2;

/// The single record written back to the caller per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionResult {
    Success {
        predicted_price: f64,
    },
    Error {
        message: String,
        error_kind: ErrorKind,
    },
}

impl PredictionResult {
    pub fn success(predicted_price: f64) -> Self {
        PredictionResult::Success { predicted_price }
    }

    pub fn from_error(error: &PredictionError) -> Self {
        PredictionResult::Error {
            message: error.to_string(),
            error_kind: error.kind(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionResult::Success { .. })
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Rounds half away from zero to [`PRICE_DECIMALS`] places.
///
/// Magnitudes where `value * 10^PRICE_DECIMALS` overflows carry no fractional
/// digits and are returned unchanged.
pub fn round_price(value: f64) -> f64 {
    let factor = 10f64.powi(PRICE_DECIMALS);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
