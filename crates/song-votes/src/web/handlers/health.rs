//! Health check HTTP handler

use axum::{extract::State, response::Response};
use tracing::error;

use crate::web::{
    AppState,
    responses::{HealthResponse, ok},
};

/// Health check endpoint
///
/// Reports the number of live recommendations, which also proves the store
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let response = match state.service.count().await {
        Ok(count) => HealthResponse::healthy(count),
        Err(e) => {
            error!("Health check could not reach the store: {}", e);
            HealthResponse::unhealthy()
        }
    };

    ok(response)
}
