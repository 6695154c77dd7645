//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all gateway endpoints
//! - Wire up middleware (tracing, CORS, transport body cap)
//! - Bind the server to a listener and serve with graceful shutdown

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use url::Url;

use crate::backend::BackendClient;
use crate::config::{CorsConfig, GatewayConfig};
use crate::http::handlers;

/// Application state injected into handlers.
///
/// The only shared pieces are the immutable config and the backend client;
/// requests otherwise hold no state in common.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub backend: Arc<BackendClient>,
}

/// Errors turning a validated config into a running router.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid backend url: {0}")]
    BackendUrl(#[from] url::ParseError),

    #[error("invalid allowed origin: {0}")]
    AllowedOrigin(#[from] axum::http::header::InvalidHeaderValue),
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, BuildError> {
        let backend = Arc::new(BackendClient::new(Url::parse(&config.backend.url)?));
        let config = Arc::new(config);

        let state = AppState {
            config: config.clone(),
            backend,
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all endpoints and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Result<Router, BuildError> {
        let router = Router::new()
            .route("/", get(handlers::index))
            .route("/api/register", post(handlers::register))
            .route("/api/login", post(handlers::login))
            .route("/api/kpi-batch", post(handlers::kpi_batch))
            .route("/api/indikator-data", get(handlers::indikator_data))
            .route("/api/kpi-my", get(handlers::kpi_my))
            .route(
                "/api/kpi-update",
                post(handlers::kpi_update)
                    .layer(DefaultBodyLimit::max(config.upload.hard_limit_bytes)),
            )
            .route("/api/kpi-by-user", post(handlers::kpi_by_user))
            .route("/api/kpi-submitted", post(handlers::kpi_submitted))
            .with_state(state)
            .layer(cors_layer(&config.cors)?)
            .layer(TraceLayer::new_for_http());

        Ok(router)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend_url = %self.config.backend.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// CORS restricted to the single configured origin.
fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer, BuildError> {
    let origin: HeaderValue = cors.allowed_origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
