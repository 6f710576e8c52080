use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use parkinsons_predict::config::{LoggingSettings, Settings};
use parkinsons_predict::routes::{self, AppState};
use parkinsons_predict::services::load_for_serving;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration is read before logging so the log settings can come from it
    let settings = Settings::load();

    // LOG_LEVEL / LOG_FORMAT override the configured logging section
    let logging = match &settings {
        Ok(s) => s.logging.clone(),
        Err(_) => LoggingSettings::default(),
    }
    .with_env_overrides();

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Parkinson's screening service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // A missing or broken model does not stop the server; predictions report 500 instead
    let model = load_for_serving(&settings.model.path).await;

    let app_state = AppState::new(model);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or_else(|| {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
    });

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
