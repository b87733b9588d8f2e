pub mod artifact;
pub mod feature_registry;
pub mod model;
pub mod scaler;

pub use artifact::{Artifact, ModelArtifact, ScalerArtifact};
pub use feature_registry::{FEATURE_COUNT, FEATURE_NAMES, FeatureRecord, FeatureVector};
pub use model::RegressionModel;
pub use scaler::FeatureScaler;
