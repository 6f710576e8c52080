// Route exports
pub mod errors;
pub mod predict;

use actix_web::web;

pub use errors::{handle_json_payload_error, json_config, JsonError, PredictionError};
pub use predict::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(predict::health_check))
        .service(
            web::scope("/smart-symptomChecker")
                .configure(predict::configure),
        );
}
