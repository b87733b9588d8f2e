use super::feature_registry::FEATURE_NAMES;
use super::model::RegressionModel;
use super::scaler::FeatureScaler;
use crate::domain::bank::BankCode;
use serde::{Deserialize, Serialize};

/// On-disk envelope around a fitted object.
///
/// `bank_code` and `feature_names` are optional provenance written by the
/// training side; when present they are checked against the request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Artifact<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub fitted: T,
}

pub type ScalerArtifact = Artifact<FeatureScaler>;
pub type ModelArtifact = Artifact<RegressionModel>;

impl<T> Artifact<T> {
    pub fn new(fitted: T) -> Self {
        Self {
            bank_code: None,
            feature_names: None,
            fitted,
        }
    }

    /// Stamps the artifact with its owning bank and the canonical feature order.
    pub fn for_bank(mut self, bank: &BankCode) -> Self {
        self.bank_code = Some(bank.as_str().to_string());
        self.feature_names = Some(FEATURE_NAMES.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn check_provenance(&self, bank: &BankCode) -> Result<(), String> {
        if let Some(owner) = &self.bank_code {
            if owner != bank.as_str() {
                return Err(format!(
                    "fitted for bank {} but requested for {}",
                    owner, bank
                ));
            }
        }

        if let Some(names) = &self.feature_names {
            if names.len() != FEATURE_NAMES.len() {
                return Err(format!(
                    "fitted on {} features, expected {}",
                    names.len(),
                    FEATURE_NAMES.len()
                ));
            }
            if let Some((idx, (got, want))) = names
                .iter()
                .zip(FEATURE_NAMES.iter())
                .enumerate()
                .find(|(_, (got, want))| got.as_str() != **want)
            {
                return Err(format!(
                    "feature {} is {:?}, expected {:?}",
                    idx, got, want
                ));
            }
        }

        Ok(())
    }
}
