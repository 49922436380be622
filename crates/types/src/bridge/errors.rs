//! Error types for privacy-chain bridge operations

use thiserror::Error;

use crate::adapters::AdapterError;

/// Errors surfaced by the bridge service and fee policy
#[derive(Error, Debug)]
pub enum BridgeError {
	#[error("Unsupported route: {reason}")]
	UnsupportedRoute { reason: String },

	#[error("Invalid amount '{amount}': {reason}")]
	InvalidAmount { amount: String, reason: String },

	#[error("Invalid action: {action}")]
	InvalidAction { action: String },

	#[error("{0}")]
	Adapter(#[from] AdapterError),
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
	/// Whether the error is the caller's fault (maps to a 400 response)
	pub fn is_client_error(&self) -> bool {
		matches!(
			self,
			BridgeError::UnsupportedRoute { .. }
				| BridgeError::InvalidAmount { .. }
				| BridgeError::InvalidAction { .. }
		)
	}
}
