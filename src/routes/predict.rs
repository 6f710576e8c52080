use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::Classifier;
use crate::models::{Diagnosis, HealthResponse, ParkinsonsInput, PredictionResponse};
use crate::routes::errors::PredictionError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when the artifact failed to load at startup
    pub model: Option<Arc<dyn Classifier>>,
}

impl AppState {
    pub fn new(model: Option<Arc<dyn Classifier>>) -> Self {
        Self { model }
    }

    pub fn with_model<C: Classifier + 'static>(model: C) -> Self {
        Self::new(Some(Arc::new(model)))
    }

    pub fn without_model() -> Self {
        Self::new(None)
    }

    /// Run the loaded model over one screening request
    pub fn diagnose(&self, input: &ParkinsonsInput) -> Result<Diagnosis, PredictionError> {
        let model = self.model.as_ref().ok_or(PredictionError::ModelUnavailable)?;
        let label = model.classify(&input.to_feature_vector())?;
        Ok(Diagnosis::from(label))
    }
}

/// Configure prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/parkinsons", web::post().to(predict_parkinsons));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let model_loaded = state.model.is_some();
    let status = if model_loaded { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        model_loaded,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Parkinson's screening endpoint
///
/// POST /smart-symptomChecker/parkinsons
///
/// Request body carries the 22 vocal measurements:
/// ```json
/// {
///   "Fo": 119.992, "Fhi": 157.302, "Flo": 74.997,
///   "Jitter_Percent": 0.00784, "Jitter_Abs": 0.00007,
///   "...": "...",
///   "D2": 2.301442, "PPE": 0.284654
/// }
/// ```
async fn predict_parkinsons(
    state: web::Data<AppState>,
    input: web::Json<ParkinsonsInput>,
) -> Result<HttpResponse, PredictionError> {
    match state.diagnose(&input) {
        Ok(diagnosis) => {
            tracing::debug!("Parkinson's prediction: {:?}", diagnosis);
            Ok(HttpResponse::Ok().json(PredictionResponse::from(diagnosis)))
        }
        Err(e) => {
            tracing::error!("Parkinson's prediction failed: {}", e);
            Err(e)
        }
    }
}
