use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use salary_dash::config::Settings;
use salary_dash::core::build_ranges;
use salary_dash::error::{handle_json_payload_error, handle_query_payload_error, StartupError};
use salary_dash::routes::{self, dashboard::AppState};
use salary_dash::services::{Dataset, PredictionCache, PredictionClient};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Load the dataset, build the range table and clients
fn build_state(settings: &Settings) -> Result<AppState, StartupError> {
    let dataset = Dataset::load(&settings.dataset.path)?;
    let (min_salary, max_salary) = dataset.salary_bounds();

    let ranges = build_ranges(min_salary, max_salary, settings.ranges.bucket_count)?;
    info!(
        "Range table built: {} buckets covering {} - {} USD",
        ranges.len(),
        min_salary,
        max_salary
    );

    let endpoint = settings.prediction.endpoint_url();
    let predictor = PredictionClient::new(
        endpoint.clone(),
        settings.prediction.timeout_secs.unwrap_or(30),
    )?;
    info!("Prediction client initialized for {}", endpoint);

    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache_capacity = settings.cache.capacity.unwrap_or(1000);
    let cache = PredictionCache::new(cache_capacity, cache_ttl);
    info!("Prediction cache initialized ({} entries, TTL: {}s)", cache_capacity, cache_ttl);

    Ok(AppState {
        dataset: Arc::new(dataset),
        ranges: Arc::new(ranges),
        predictor: Arc::new(predictor),
        cache: Arc::new(cache),
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Settings are read first so the [logging] section can configure the subscriber;
    // LOG_LEVEL / LOG_FORMAT still override it
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default()
        .with_overrides(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok());

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Salary Dash service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        StartupError::from(e)
    })?;

    info!("Configuration loaded successfully");

    let app_state = build_state(&settings).map_err(|e| {
        error!("Failed to initialize service: {}", e);
        e
    })?;

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
