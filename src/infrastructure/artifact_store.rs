//! Filesystem artifact store.
//!
//! Each bank owns two JSON files in the artifact directory,
//! `{bank_code}_scaler.json` and `{bank_code}_model.json`. A bank is only
//! registered when both files exist.

use crate::domain::bank::{BankCode, MODEL_SUFFIX, SCALER_SUFFIX};
use crate::domain::errors::PredictionError;
use crate::domain::ml::{Artifact, FeatureScaler, RegressionModel};
use crate::domain::ports::ArtifactStore;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct FileArtifactStore {
    artifact_dir: PathBuf,
    validate_provenance: bool,
}

impl FileArtifactStore {
    pub fn new(artifact_dir: impl Into<PathBuf>, validate_provenance: bool) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
            validate_provenance,
        }
    }

    fn load_artifact<T: DeserializeOwned>(
        &self,
        bank: &BankCode,
        path: PathBuf,
    ) -> Result<Artifact<T>, PredictionError> {
        let content = fs::read_to_string(&path).map_err(|source| PredictionError::ArtifactIo {
            path: path.clone(),
            source,
        })?;

        let artifact: Artifact<T> =
            serde_json::from_str(&content).map_err(|source| PredictionError::ArtifactFormat {
                path: path.clone(),
                source,
            })?;

        if self.validate_provenance {
            artifact
                .check_provenance(bank)
                .map_err(|reason| PredictionError::ArtifactMismatch {
                    path: path.clone(),
                    reason,
                })?;
        }

        debug!("Loaded artifact {:?}", path);
        Ok(artifact)
    }
}

impl ArtifactStore for FileArtifactStore {
    fn registered_banks(&self) -> Result<Vec<BankCode>, PredictionError> {
        let entries =
            fs::read_dir(&self.artifact_dir).map_err(|source| PredictionError::ArtifactIo {
                path: self.artifact_dir.clone(),
                source,
            })?;

        let mut scalers = BTreeSet::new();
        let mut models = BTreeSet::new();

        for entry in entries {
            let entry = entry.map_err(|source| PredictionError::ArtifactIo {
                path: self.artifact_dir.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            if let Some(code) = name.strip_suffix(SCALER_SUFFIX) {
                if let Ok(code) = BankCode::parse(code) {
                    scalers.insert(code);
                }
            } else if let Some(code) = name.strip_suffix(MODEL_SUFFIX) {
                if let Ok(code) = BankCode::parse(code) {
                    models.insert(code);
                }
            }
        }

        for orphan in scalers.symmetric_difference(&models) {
            warn!(
                "Bank {} has an incomplete artifact pair in {:?}, skipping",
                orphan, self.artifact_dir
            );
        }

        Ok(scalers.intersection(&models).cloned().collect())
    }

    fn resolve(&self, bank: &BankCode) -> Result<(), PredictionError> {
        if self.registered_banks()?.contains(bank) {
            Ok(())
        } else {
            Err(PredictionError::UnknownBank {
                bank_code: bank.to_string(),
                artifact_dir: self.artifact_dir.clone(),
            })
        }
    }

    fn load_scaler(&self, bank: &BankCode) -> Result<FeatureScaler, PredictionError> {
        let path = self.artifact_dir.join(bank.scaler_file_name());
        let artifact = self.load_artifact::<FeatureScaler>(bank, path.clone())?;
        artifact
            .fitted
            .validate()
            .map_err(|reason| PredictionError::ArtifactInvalid { path, reason })?;

        info!("Loaded scaler for bank {}", bank);
        Ok(artifact.fitted)
    }

    fn load_model(&self, bank: &BankCode) -> Result<RegressionModel, PredictionError> {
        let path = self.artifact_dir.join(bank.model_file_name());
        let artifact = self.load_artifact::<RegressionModel>(bank, path.clone())?;
        artifact
            .fitted
            .validate()
            .map_err(|reason| PredictionError::ArtifactInvalid { path, reason })?;

        info!("Loaded {} model for bank {}", artifact.fitted.name(), bank);
        Ok(artifact.fitted)
    }
}
