use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of feature names.
/// This order MUST match exactly with the order used when the scaler and model were fitted.
/// Any change here is a breaking change for every persisted artifact.
pub const FEATURE_NAMES: &[&str] = &[
    "open_price",
    "high",
    "low",
    "volume",
    "percentage_change",
    "gdp",
    "interest_rate",
    "total_assets",
    "total_equity",
    "total_liabilities",
    "net_profit",
    "eps",
    "pe",
    "pbv",
    "market_cap",
    "book_value_per_share",
    "roe",
    "roa",
];

pub const FEATURE_COUNT: usize = 18;

/// One observation of market and fundamental data for a bank.
///
/// Unknown payload fields are ignored; every field below is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub open_price: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub percentage_change: f64,
    pub gdp: f64,
    pub interest_rate: f64,
    pub total_assets: f64,
    pub total_equity: f64,
    pub total_liabilities: f64,
    pub net_profit: f64,
    pub eps: f64,
    pub pe: f64,
    pub pbv: f64,
    pub market_cap: f64,
    pub book_value_per_share: f64,
    pub roe: f64,
    pub roa: f64,
}

impl FeatureRecord {
    /// Builds a record from the caller's JSON payload.
    ///
    /// Presence is checked first so an absent field is always reported as
    /// `MissingFeature` by name, never replaced by a default.
    pub fn from_payload(payload: &Value) -> Result<Self, PredictionError> {
        let object = payload
            .as_object()
            .ok_or(PredictionError::PayloadNotObject)?;

        if let Some(field) = FEATURE_NAMES
            .iter()
            .copied()
            .find(|name| !object.contains_key(*name))
        {
            return Err(PredictionError::MissingFeature { field });
        }

        serde_json::from_value(payload.clone()).map_err(|e| PredictionError::InvalidFeature {
            reason: e.to_string(),
        })
    }

    /// Converts the record into the fixed-order vector used by the scaler and model.
    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector([
            self.open_price,
            self.high,
            self.low,
            self.volume,
            self.percentage_change,
            self.gdp,
            self.interest_rate,
            self.total_assets,
            self.total_equity,
            self.total_liabilities,
            self.net_profit,
            self.eps,
            self.pe,
            self.pbv,
            self.market_cap,
            self.book_value_per_share,
            self.roe,
            self.roa,
        ])
    }
}

/// Fixed-order numeric encoding of one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "open_price": 10, "high": 11, "low": 9, "volume": 1000,
            "percentage_change": 0.5, "gdp": 2.1, "interest_rate": 1.5,
            "total_assets": 500, "total_equity": 200, "total_liabilities": 300,
            "net_profit": 50, "eps": 2.0, "pe": 15, "pbv": 1.2,
            "market_cap": 1000, "book_value_per_share": 8, "roe": 0.1, "roa": 0.05
        })
    }

    #[test]
    fn test_feature_vector_length() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        let record = FeatureRecord::from_payload(&sample_payload()).unwrap();
        assert_eq!(record.to_vector().as_slice().len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_vector_order_follows_feature_names() {
        let record = FeatureRecord::from_payload(&sample_payload()).unwrap();
        let by_name = serde_json::to_value(&record).unwrap();
        let vector = record.to_vector();

        for (idx, name) in FEATURE_NAMES.iter().enumerate() {
            assert_eq!(
                by_name[*name].as_f64().unwrap(),
                vector.as_slice()[idx],
                "feature {} out of order",
                name
            );
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut payload = sample_payload();
        payload["close_price"] = json!(10.5);
        payload["date"] = json!("2024-01-02");

        let record = FeatureRecord::from_payload(&payload).unwrap();
        let baseline = FeatureRecord::from_payload(&sample_payload()).unwrap();
        assert_eq!(record.to_vector(), baseline.to_vector());
    }

    #[test]
    fn test_each_missing_field_is_reported_by_name() {
        for name in FEATURE_NAMES {
            let mut payload = sample_payload();
            payload.as_object_mut().unwrap().remove(*name);

            match FeatureRecord::from_payload(&payload) {
                Err(PredictionError::MissingFeature { field }) => assert_eq!(field, *name),
                other => panic!("expected MissingFeature for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let mut payload = sample_payload();
        payload["pe"] = json!("fifteen");
        assert!(matches!(
            FeatureRecord::from_payload(&payload),
            Err(PredictionError::InvalidFeature { .. })
        ));

        payload["pe"] = Value::Null;
        assert!(matches!(
            FeatureRecord::from_payload(&payload),
            Err(PredictionError::InvalidFeature { .. })
        ));
    }

    #[test]
    fn test_non_object_payload() {
        let result = FeatureRecord::from_payload(&json!([1, 2, 3]));
        assert!(matches!(result, Err(PredictionError::PayloadNotObject)));
    }
}
