mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::Matcher;
use routes::chat::AppState;
use services::{load_catalog, OllamaClient};
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
///
/// A missing or non-string `text` field lands here via serde, so malformed
/// chat requests come back as a structured 400 instead of a default error.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_input".to_string(),
        message: format!("Invalid request body: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting clubmatch service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the club catalog once; it is read-only for the process lifetime
    let catalog = Arc::new(load_catalog(&settings.catalog.path).unwrap_or_else(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
        panic!("Catalog error: {}", e);
    }));

    info!("Catalog loaded: {} clubs from {}", catalog.len(), settings.catalog.path);

    // Build the matcher from the configured policy
    let policy = settings.match_policy();
    let matcher = Matcher::new(policy, settings.matching.max_results);

    info!(
        "Matcher initialized (strategy: {:?}, max_results: {})",
        settings.matching.strategy, settings.matching.max_results
    );

    // Initialize the LLM client
    let explainer = Arc::new(OllamaClient::new(
        settings.ollama.base_url.clone(),
        settings.ollama.model.clone(),
        settings.ollama.timeout_secs,
    ));

    info!(
        "Ollama client initialized (endpoint: {}, model: {}, timeout: {}s)",
        settings.ollama.base_url, settings.ollama.model, settings.ollama.timeout_secs
    );

    // Build application state
    let app_state = AppState {
        catalog,
        matcher,
        explainer,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let frontend_dir = settings.server.frontend_dir.clone();

    let serve_frontend = std::path::Path::new(&frontend_dir).is_dir();
    if serve_frontend {
        info!("Serving frontend from {}", frontend_dir);
    } else {
        warn!("Frontend directory {} not found, static serving disabled", frontend_dir);
    }

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let mut app = App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes);

        if serve_frontend {
            app = app.service(Files::new("/", &frontend_dir).index_file("index.html"));
        }

        app
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
