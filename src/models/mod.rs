// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Diagnosis, FeatureVector, Label, FEATURE_COUNT, FEATURE_NAMES};
pub use requests::ParkinsonsInput;
pub use responses::{ErrorResponse, HealthResponse, PredictionErrorResponse, PredictionResponse};
