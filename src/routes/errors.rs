use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::ClassifyError;
use crate::models::{ErrorResponse, PredictionErrorResponse};

/// JSON error response for rejected request bodies
#[derive(Debug)]
pub struct JsonError(pub ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Map body extraction failures to client errors.
///
/// Well-formed JSON that does not fit the schema (missing field, wrong type)
/// is a 422; anything that is not JSON at all is a 400.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);

    let (status, kind) = match &err {
        error::JsonPayloadError::Deserialize(e) if e.is_data() => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid_payload")
        }
        error::JsonPayloadError::Overflow { .. } | error::JsonPayloadError::OverflowKnownLength { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
        }
        _ => (StatusCode::BAD_REQUEST, "invalid_json"),
    };

    JsonError(ErrorResponse {
        error: kind.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
    .into()
}

/// Extractor configuration shared by the server and tests
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Failure to produce a prediction for a valid request
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Parkinson's model is unavailable: it failed to load at startup")]
    ModelUnavailable,

    #[error("Prediction failed: {0}")]
    Classification(#[from] ClassifyError),
}

impl error::ResponseError for PredictionError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(PredictionErrorResponse {
            error: self.to_string(),
        })
    }
}
