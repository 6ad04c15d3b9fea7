//! Web layer module
//!
//! HTTP interface for the song-votes service. Handlers are thin and delegate
//! to the service layer; errors are mapped to status codes in
//! [`responses::handle_error`].

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::services::RecommendationService;

pub mod handlers;
pub mod responses;

pub use responses::{ApiResponse, handle_error};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn RecommendationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: Arc<dyn RecommendationService>, config: Config) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(state: AppState) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", state.config.web.host, state.config.web.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    state.config.web.host, state.config.web.port
                )
            })?;
        let app = create_router(state);
        Ok(Self { app, addr })
    }

    /// Serve until Ctrl-C is received
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind to {}", self.addr))?;
        info!("Listening on {}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => warn!("Failed to listen for Ctrl+C, shutting down: {}", e),
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(recommendation_routes());

    if state.config.features.test_routes {
        warn!("Test-administration routes are enabled");
        router = router.route("/e2e/truncate", post(handlers::e2e::truncate));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn recommendation_routes() -> Router<AppState> {
    use handlers::recommendations as r;

    Router::new()
        .route(
            "/recommendations",
            get(r::list_recommendations).post(r::create_recommendation),
        )
        .route("/recommendations/random", get(r::random_recommendation))
        .route("/recommendations/top/{amount}", get(r::top_recommendations))
        .route("/recommendations/{id}", get(r::get_recommendation))
        .route("/recommendations/{id}/upvote", post(r::upvote))
        .route("/recommendations/{id}/downvote", post(r::downvote))
}
