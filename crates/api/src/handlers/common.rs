use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crossway_types::{BridgeError, QuoteError};

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
	(
		status,
		Json(ErrorResponse {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}),
	)
}

/// Map quote-service failures onto HTTP statuses
pub fn quote_error(error: QuoteError) -> ApiError {
	match &error {
		QuoteError::Validation(_) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", error.message())
		},
		QuoteError::Adapter(_) => {
			error_response(StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", error.message())
		},
	}
}

/// Map bridge-service failures onto HTTP statuses
pub fn bridge_error(error: BridgeError) -> ApiError {
	if error.is_client_error() {
		error_response(StatusCode::BAD_REQUEST, "BRIDGE_ERROR", error.to_string())
	} else {
		error_response(StatusCode::BAD_GATEWAY, "BRIDGE_ERROR", error.to_string())
	}
}

pub fn storage_error(error: crossway_storage::StorageError) -> ApiError {
	error_response(
		StatusCode::INTERNAL_SERVER_ERROR,
		"STORAGE_ERROR",
		error.to_string(),
	)
}
