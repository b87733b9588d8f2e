use crate::domain::bank::BankCode;
use crate::domain::errors::PredictionError;
use crate::domain::ml::model::RegressionModel;
use crate::domain::ml::scaler::FeatureScaler;

/// Read-only source of fitted per-bank artifacts.
pub trait ArtifactStore {
    /// Bank codes that have a complete scaler/model pair.
    fn registered_banks(&self) -> Result<Vec<BankCode>, PredictionError>;

    /// Fails with `UnknownBank` unless `bank` is registered.
    fn resolve(&self, bank: &BankCode) -> Result<(), PredictionError>;

    fn load_scaler(&self, bank: &BankCode) -> Result<FeatureScaler, PredictionError>;

    fn load_model(&self, bank: &BankCode) -> Result<RegressionModel, PredictionError>;
}
