pub mod inference_pipeline;
pub mod predictor;

pub use inference_pipeline::InferencePipeline;
pub use predictor::PricePredictor;
