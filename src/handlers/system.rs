use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::router::SentivestState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseHealthResponse {
    pub status: String,
    pub database: String,
}

/// GET / -> greeting with the configured version.
pub async fn root(State(state): State<SentivestState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World!".to_string(),
        version: state.settings().app_version().to_string(),
        status: "running".to_string(),
    })
}

/// GET /health -> always healthy; does not touch the database.
pub async fn health(State(state): State<SentivestState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings().app_version().to_string(),
    })
}

/// GET /health/db -> runs the liveness query; 503 when the database is unreachable.
pub async fn database_health(
    State(state): State<SentivestState>,
) -> (StatusCode, Json<DatabaseHealthResponse>) {
    let (status, health, database) = if state.db().check_connection().await {
        (StatusCode::OK, "healthy", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "down")
    };
    (
        status,
        Json(DatabaseHealthResponse {
            status: health.to_string(),
            database: database.to_string(),
        }),
    )
}
