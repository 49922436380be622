use axum::{
	extract::{Path, State},
	response::Json,
};
use tracing::debug;

use crate::handlers::common::{storage_error, ApiError};
use crate::state::AppState;
use crossway_storage::Storage;
use crossway_types::SwapSettings;

/// GET /api/v1/sessions/{id}/settings - Session settings
///
/// Sessions that never stored settings read the defaults: best route
/// priority, normal gas, auto slippage, every bridge and exchange enabled.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/sessions/{id}/settings",
    responses((status = 200, description = "Session swap settings", body = SwapSettings)),
    tag = "settings"
))]
pub async fn get_settings(
	State(state): State<AppState>,
	Path(session_id): Path<String>,
) -> Result<Json<SwapSettings>, ApiError> {
	let settings = state
		.storage
		.get_settings(&session_id)
		.await
		.map_err(storage_error)?
		.unwrap_or_default();
	Ok(Json(settings))
}

/// PUT /api/v1/sessions/{id}/settings - Replace session settings
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/api/v1/sessions/{id}/settings",
    request_body = SwapSettings,
    responses((status = 200, description = "Stored settings", body = SwapSettings)),
    tag = "settings"
))]
pub async fn put_settings(
	State(state): State<AppState>,
	Path(session_id): Path<String>,
	Json(settings): Json<SwapSettings>,
) -> Result<Json<SwapSettings>, ApiError> {
	debug!(%session_id, "replacing session settings");
	state
		.storage
		.put_settings(&session_id, settings.clone())
		.await
		.map_err(storage_error)?;
	Ok(Json(settings))
}
