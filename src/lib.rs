//! Bank stock price prediction.
//!
//! ```text
//! payload → FeatureRecord → FeatureVector ─┐
//! bank code → registry → scaler + model ───┴→ InferencePipeline → PredictionResult
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
