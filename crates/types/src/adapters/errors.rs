//! Error types for upstream adapter operations

use thiserror::Error;

/// Upstream client operation errors
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("{message}")]
	Upstream { message: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

impl AdapterError {
	/// Extract the HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			AdapterError::HttpError(source) => source.status().map(|status| status.as_u16()),
			_ => None,
		}
	}

	/// Build a status error, preferring the upstream's own message when the
	/// error body carried one
	pub fn from_status(status_code: u16, upstream_message: Option<String>) -> Self {
		match upstream_message {
			Some(message) if !message.is_empty() => Self::HttpStatusError {
				status_code,
				reason: message,
			},
			_ => Self::HttpStatusError {
				status_code,
				reason: format!("upstream returned status {}", status_code),
			},
		}
	}
}
