//! Recommendation HTTP handlers
//!
//! Thin wrappers around [`RecommendationService`](crate::services::RecommendationService)
//! calls, focusing only on request/response mapping.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::errors::{AppError, AppResult, WebError};
use crate::models::{RecommendationCreateRequest, RecommendationId};
use crate::web::{
    AppState,
    responses::{created, ok},
};

/// Request DTO for creating a recommendation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendationRequest {
    pub name: String,
    pub link: String,
}

impl From<CreateRecommendationRequest> for RecommendationCreateRequest {
    fn from(request: CreateRecommendationRequest) -> Self {
        Self::new(request.name, request.link)
    }
}

/// Query parameters for `GET /recommendations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Number of most recent recommendations to return
    pub limit: Option<i64>,
    /// Return every recommendation in insertion order, ignoring `limit`
    #[serde(default)]
    pub all: bool,
}

/// Parse a `{id}` path segment, reporting failures in the error envelope
fn parse_id(raw: &str) -> Result<RecommendationId, WebError> {
    raw.trim().parse().map_err(|_| {
        WebError::invalid_request("id", format!("'{}' is not a valid recommendation id", raw))
    })
}

pub async fn create_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecommendationRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(payload) = payload.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let recommendation = state.service.insert(payload.into()).await?;
    Ok(created(recommendation))
}

pub async fn upvote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let recommendation = state.service.upvote(id).await?;
    Ok(ok(recommendation))
}

pub async fn downvote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let outcome = state.service.downvote(id).await?;
    Ok(ok(outcome))
}

pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let recommendation = state.service.get_by_id(id).await?;
    Ok(ok(recommendation))
}

pub async fn list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    if params.all {
        return Ok(ok(state.service.get_all().await?));
    }

    let limit = match params.limit {
        Some(limit) => limit,
        None => i64::try_from(state.config.web.default_list_limit).unwrap_or(i64::MAX),
    };
    let recommendations = state.service.get_recent(limit).await?;
    Ok(ok(recommendations))
}

pub async fn random_recommendation(State(state): State<AppState>) -> AppResult<Response> {
    let recommendation = state.service.get_random().await?;
    Ok(ok(recommendation))
}

pub async fn top_recommendations(
    State(state): State<AppState>,
    Path(amount): Path<String>,
) -> AppResult<Response> {
    let amount: i64 = amount.trim().parse().map_err(|_| {
        WebError::invalid_request("amount", format!("'{}' is not an integer", amount))
    })?;
    let recommendations = state.service.get_top(amount).await?;
    Ok(ok(recommendations))
}
