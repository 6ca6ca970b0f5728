//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! Builds the axum router, wires middleware (request stamping, logging,
//! tracing, CORS), runs migrations, and serves.

// region: --- Imports
use axum::{
    routing::{get, post, put},
    Router,
};
use lib_core::{config, create_pool, Config, DbPool};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handlers;
use crate::middleware::{log_requests, require_auth, stamp_req};
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3001")
    pub bind_address: String,
    /// Allowed CORS origins (the dashboard and landing pages)
    pub allowed_origins: Vec<String>,
    /// Database migrations path
    pub migrations_path: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3001".to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            migrations_path: "./migrations",
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading, database connection,
/// migrations, or socket binding fails.
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();

    info!("FlowGen auth backend starting");

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    config::init_config().map_err(|e| anyhow::anyhow!(e))?;
    let app_config = config::core_config().clone();

    // Ensure the directory for a file-backed SQLite database exists.
    if let Some(db_path) = app_config.database_url.strip_prefix("sqlite:") {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {:?}", parent);
            }
        }
    }

    info!("Connecting to database...");
    let pool = create_pool(&app_config.database_url).await?;

    info!("Running database migrations from: {}", server_config.migrations_path);
    let migrator =
        sqlx::migrate::Migrator::new(std::path::Path::new(server_config.migrations_path)).await?;
    migrator.run(&pool).await?;
    info!("Migrations complete");

    let state = AppState {
        db: pool,
        config: app_config,
    };

    let app = create_router(state, server_config.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address).await?;

    info!("Server ready: http://{}", server_config.bind_address);
    log_routes();

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Configure the tracing subscriber from `LOG_LEVEL` (default: info).
fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    // Ignore the error if a subscriber is already installed (tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Create the main application router with all routes.
pub fn create_router(state: AppState, allowed_origins: Vec<String>) -> Router {
    use axum::http::{HeaderValue, Method};

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ]);

    // Routes behind the bearer-token middleware. The middleware validates the
    // JWT and injects Claims; handlers resolve the user per request.
    let protected = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/user", get(handlers::user::current_user))
        .route("/api/user/profile", put(handlers::user::update_profile))
        .layer(axum::middleware::from_fn(require_auth));

    Router::new()
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/health", get(|| async { "OK" }))
        .merge(protected)
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "Route not found") })
        .with_state(state)
        // Request stamping (adds request ID) - must run first
        .layer(axum::middleware::from_fn(stamp_req))
        // Request/response logging
        .layer(axum::middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<crate::middleware::mw_req_stamp::RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        .layer(cors)
}

/// Log the exposed endpoints on startup.
fn log_routes() {
    info!("AUTH:");
    info!("   POST /api/auth/signup");
    info!("   POST /api/auth/login");
    info!("   POST /api/auth/logout   (bearer token)");
    info!("USER:");
    info!("   GET  /api/user          (bearer token)");
    info!("   PUT  /api/user/profile  (bearer token)");
    info!("HEALTH:");
    info!("   GET  /health");
}
// endregion: --- Server Setup
