//! Test-administration handlers
//!
//! Only routed when `features.test_routes` is enabled.

use axum::{extract::State, response::Response};
use tracing::warn;

use crate::errors::AppResult;
use crate::web::{
    AppState,
    responses::{ApiResponse, ok},
};

/// Remove every recommendation
pub async fn truncate(State(state): State<AppState>) -> AppResult<Response> {
    warn!("Truncate requested through the test-administration route");
    state.service.truncate().await?;
    Ok(ok(ApiResponse::success("All recommendations removed")))
}
