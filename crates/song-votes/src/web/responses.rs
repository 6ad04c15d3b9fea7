//! HTTP response types and utilities
//!
//! Successful responses carry the bare resource as JSON. Failures use the
//! [`ApiResponse`] envelope so every error body has the same shape.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

use crate::errors::{AppError, WebError};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn error_with_details(message: String, details: HashMap<String, String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            details: Some(details),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<u64>,
}

impl HealthResponse {
    pub fn healthy(recommendations: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            recommendations: Some(recommendations),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy".to_string(),
            recommendations: None,
        }
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message, details) = match &error {
        AppError::Validation { message } => {
            (StatusCode::UNPROCESSABLE_ENTITY, message.clone(), None)
        }
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{} with id '{}' not found", resource, id),
            None,
        ),
        AppError::DuplicateName { name } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            error.to_string(),
            Some(HashMap::from([("name".to_string(), name.clone())])),
        ),
        AppError::Conflict { message } => (StatusCode::CONFLICT, message.clone(), None),
        AppError::Web(WebError::InvalidRequest { field, message }) => (
            StatusCode::BAD_REQUEST,
            message.clone(),
            Some(HashMap::from([("field".to_string(), field.clone())])),
        ),
        AppError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Data access failed".to_string(),
            None,
        ),
        AppError::Configuration { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Configuration error: {}", message),
            None,
        ),
        AppError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {}", message),
            None,
        ),
    };

    if status.is_server_error() {
        error!("Request failed: {}", error);
    }

    let response = match details {
        Some(details) => ApiResponse::error_with_details(message, details),
        None => ApiResponse::error(message),
    };

    (status, Json(response)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

/// Success response helpers
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::not_found("Recommendation", 1), StatusCode::NOT_FOUND)]
    #[case(AppError::duplicate_name("Song"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(AppError::validation("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(AppError::Conflict { message: "race".to_string() }, StatusCode::CONFLICT)]
    #[case(
        AppError::Web(WebError::invalid_request("amount", "not a number")),
        StatusCode::BAD_REQUEST
    )]
    #[case(AppError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status_mapping(#[case] error: AppError, #[case] expected: StatusCode) {
        assert_eq!(handle_error(error).status(), expected);
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::error("gone".to_string())).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "gone");
        assert!(body.get("data").is_none());
        assert!(body.get("timestamp").is_some());
    }
}
