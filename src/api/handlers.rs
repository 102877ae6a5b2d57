//! API request handlers

use crate::medical::{Disease, MedicalService, SearchResult, ServiceError};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared server state
pub struct ServerState {
    pub service: Arc<MedicalService>,
}

/// Shared API state
pub type ApiState = Arc<ServerState>;

// ============================================================================
// Health check
// ============================================================================

/// Per-service health status in the health response
#[derive(Serialize)]
pub struct ServiceHealthStatus {
    pub neo4j: String,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealthStatus,
}

/// Health check handler — verifies actual connectivity to Neo4j.
///
/// Returns 200 + `"ok"` when connected, 503 + `"unhealthy"` otherwise.
pub async fn health(State(state): State<ApiState>) -> (StatusCode, Json<HealthResponse>) {
    let neo4j_ok = state.service.health_check().await;

    let (http_status, status, neo4j) = if neo4j_ok {
        (StatusCode::OK, "ok", "connected")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "disconnected")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceHealthStatus {
                neo4j: neo4j.to_string(),
            },
        }),
    )
}

// ============================================================================
// Diseases
// ============================================================================

/// Get a disease with its symptoms and drugs by exact name
pub async fn get_disease(
    State(state): State<ApiState>,
    Path(disease_name): Path<String>,
) -> Result<Json<Disease>, AppError> {
    let disease = state
        .service
        .get_disease(&disease_name)
        .await?
        .ok_or(AppError::NotFound("Disease not found".into()))?;

    Ok(Json(disease))
}

// ============================================================================
// Search
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

/// Search diseases, symptoms and drugs by name substring
pub async fn search(
    State(state): State<ApiState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResult>, AppError> {
    let Query(params) = params.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let result = state.service.search(&params.query).await?;
    Ok(Json(result))
}

// ============================================================================
// Errors
// ============================================================================

/// API error type
#[derive(Debug)]
pub enum AppError {
    Internal(anyhow::Error),
    NotFound(String),
    Unprocessable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(serde_json::json!({
            "detail": message
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::Internal(err.into())
    }
}
