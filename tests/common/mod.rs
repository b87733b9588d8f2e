#![allow(dead_code)]

use bank_predict::domain::bank::BankCode;
use bank_predict::domain::ml::{Artifact, FEATURE_COUNT, FeatureScaler, RegressionModel};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Artifact directory under the system temp dir, removed on drop.
pub struct ArtifactDir {
    pub path: PathBuf,
}

impl ArtifactDir {
    pub fn new(label: &str) -> Self {
        let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "bank_predict_{}_{}_{}_{}",
            label,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0),
            unique_id
        ));
        fs::create_dir_all(&path).expect("Failed to create test temp dir");
        Self { path }
    }

    pub fn write_pair(&self, bank: &str, scaler: FeatureScaler, model: RegressionModel) {
        let bank = BankCode::parse(bank).expect("valid bank code");
        write_json(
            &self.path.join(bank.scaler_file_name()),
            &Artifact::new(scaler).for_bank(&bank),
        );
        write_json(
            &self.path.join(bank.model_file_name()),
            &Artifact::new(model).for_bank(&bank),
        );
    }
}

impl Drop for ArtifactDir {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.path).ok();
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) {
    let content = serde_json::to_string_pretty(value).expect("serialize artifact");
    fs::write(path, content).expect("write artifact");
}

/// Standardization fitted on a loose range of bank data.
pub fn fitted_scaler() -> FeatureScaler {
    FeatureScaler::Standard {
        mean: Some(vec![
            9.5, 10.2, 8.9, 900.0, 0.1, 2.0, 1.25, 450.0, 180.0, 270.0, 40.0, 1.8, 12.0, 1.0,
            950.0, 7.5, 0.09, 0.04,
        ]),
        scale: Some(vec![
            1.5, 1.6, 1.4, 250.0, 0.8, 0.5, 0.4, 60.0, 25.0, 40.0, 12.0, 0.5, 3.0, 0.3, 200.0,
            1.2, 0.03, 0.01,
        ]),
    }
}

/// Linear model with a distinct weight per feature.
pub fn weighted_model() -> RegressionModel {
    RegressionModel::Linear {
        coefficients: (1..=FEATURE_COUNT).map(|i| i as f64 * 0.37).collect(),
        intercept: 25.0,
    }
}

/// Linear model whose output ignores the features entirely.
pub fn constant_model(value: f64) -> RegressionModel {
    RegressionModel::Linear {
        coefficients: vec![0.0; FEATURE_COUNT],
        intercept: value,
    }
}

pub fn example_payload() -> Value {
    json!({
        "open_price": 10, "high": 11, "low": 9, "volume": 1000,
        "percentage_change": 0.5, "gdp": 2.1, "interest_rate": 1.5,
        "total_assets": 500, "total_equity": 200, "total_liabilities": 300,
        "net_profit": 50, "eps": 2.0, "pe": 15, "pbv": 1.2,
        "market_cap": 1000, "book_value_per_share": 8, "roe": 0.1, "roa": 0.05
    })
}
