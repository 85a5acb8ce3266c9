use analyzer::RangeAnalyzer;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
};
use configuration::error::ConfigError;
use configuration::{Config, CorsConfig, StorageBackend};
use database::{DbRepository, InMemoryStore, RangeStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
// Note: Tracing is initialized by the binary, not here.

pub mod error;
pub mod handlers;
pub mod service;

pub use service::RangeService;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub service: RangeService,
}

impl AppState {
    pub fn new(store: Arc<dyn RangeStore>, analyzer: RangeAnalyzer) -> Self {
        Self {
            service: RangeService::new(store, analyzer),
        }
    }
}

/// Builds the CORS layer. An empty origin list allows any origin.
fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| {
                    ConfigError::ValidationError(format!("invalid CORS origin: {o}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any()))
}

/// Defines the application routes and middleware.
pub fn router(state: AppState, config: &Config) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.cors)?;

    let app = Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/ranges",
            get(handlers::list_ranges).post(handlers::create_range),
        )
        .route("/api/ranges/validate", post(handlers::validate_range))
        .route("/api/ranges/stats", post(handlers::range_stats))
        .route(
            "/api/ranges/:id",
            get(handlers::get_range)
                .put(handlers::update_range)
                .delete(handlers::delete_range),
        )
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes));

    Ok(app)
}

/// Creates the store selected by `storage.backend`.
pub async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn RangeStore>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = database::connect(&config.database).await?;
            if config.database.run_migrations {
                database::run_migrations(&pool).await?;
            }
            Ok(Arc::new(DbRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; saved ranges are lost on shutdown.");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

/// The main function to configure and run the web server.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let store = build_store(&config).await?;
    let analyzer = RangeAnalyzer::new(config.analysis.clone());
    let app = router(AppState::new(store, analyzer), &config)?;

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal.");
    }
}
