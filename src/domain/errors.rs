use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a prediction failure, reported to callers
/// alongside the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingFeature,
    ArtifactLoad,
    Inference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingFeature => write!(f, "missing_feature"),
            ErrorKind::ArtifactLoad => write!(f, "artifact_load"),
            ErrorKind::Inference => write!(f, "inference"),
        }
    }
}

/// Errors raised inside the predict pipeline. Every variant is reported
/// in-band as an error result rather than terminating the process.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Input payload must be a JSON object of feature values")]
    PayloadNotObject,

    #[error("Missing required feature: {field}")]
    MissingFeature { field: &'static str },

    #[error("Invalid feature value: {reason}")]
    InvalidFeature { reason: String },

    #[error("Invalid bank code {bank_code:?}: only letters, digits, '_' and '-' are allowed")]
    InvalidBankCode { bank_code: String },

    #[error("No model artifacts registered for bank {bank_code} in {artifact_dir:?}")]
    UnknownBank {
        bank_code: String,
        artifact_dir: PathBuf,
    },

    #[error("Failed to read artifact {path:?}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize artifact {path:?}: {source}")]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Artifact {path:?} is invalid: {reason}")]
    ArtifactInvalid { path: PathBuf, reason: String },

    #[error("Artifact {path:?} does not match this request: {reason}")]
    ArtifactMismatch { path: PathBuf, reason: String },

    #[error("Dimension mismatch in {stage}: expected {expected} features, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictionError::PayloadNotObject | PredictionError::MissingFeature { .. } => {
                ErrorKind::MissingFeature
            }
            PredictionError::InvalidBankCode { .. }
            | PredictionError::UnknownBank { .. }
            | PredictionError::ArtifactIo { .. }
            | PredictionError::ArtifactFormat { .. }
            | PredictionError::ArtifactInvalid { .. }
            | PredictionError::ArtifactMismatch { .. } => ErrorKind::ArtifactLoad,
            PredictionError::InvalidFeature { .. }
            | PredictionError::DimensionMismatch { .. }
            | PredictionError::Inference { .. } => ErrorKind::Inference,
        }
    }
}
