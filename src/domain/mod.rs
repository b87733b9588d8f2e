// Bank identifiers
pub mod bank;

// Domain-specific error types
pub mod errors;

// Feature registry, fitted scalers and models
pub mod ml;

// Port interfaces
pub mod ports;

// Result record emitted per invocation
pub mod prediction;
