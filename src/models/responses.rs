use serde::{Deserialize, Serialize};
use crate::models::domain::Diagnosis;

/// Response for the prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub result: String,
}

impl From<Diagnosis> for PredictionResponse {
    fn from(diagnosis: Diagnosis) -> Self {
        Self {
            result: diagnosis.message().to_string(),
        }
    }
}

/// Body returned when a prediction cannot be produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response for rejected payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
