use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use ad_targeting::config::{LoggingSettings, Settings};
use ad_targeting::core::TargetingEngine;
use ad_targeting::routes::{self, AppState};
use ad_targeting::services::DataStore;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting ad targeting service...");

    // The service cannot run without its data
    let store = DataStore::load(&settings.data.users_path, &settings.data.ads_path)
        .map_err(|e| {
            error!("Failed to load data: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?;

    let engine = TargetingEngine::new(store);
    let app_state = AppState::new(engine);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
