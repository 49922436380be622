use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;
use crossway_storage::Storage;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = String)),
    tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub storage_healthy: bool,
}

/// GET /ready - Readiness probe with a storage check
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/ready",
    responses((status = 200, description = "Readiness response")),
    tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let storage_healthy = state.storage.health_check().await.unwrap_or(false);

	let status = if storage_healthy { "ready" } else { "degraded" };
	let code = if storage_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};

	(
		code,
		Json(ReadinessResponse {
			status: status.to_string(),
			storage_healthy,
		}),
	)
}
