// Scaler + model inference
pub mod ml;

// Prediction boundary
pub mod prediction_service;
