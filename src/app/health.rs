//! 健康检查

use axum::{extract::State, response::Json};
use tracing::warn;

use super::AppState;
use crate::core::{error::ApiError, response::HealthResponse};

// GET /health
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.users.ping().await.map_err(|e| {
        warn!(error = %e, "health check failed");
        ApiError::ServiceUnavailable("database unavailable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
