//! Error types for quote operations

use thiserror::Error;

use crate::adapters::AdapterError;

/// Errors surfaced by the quote service
#[derive(Error, Debug)]
pub enum QuoteError {
	#[error("Quote validation failed: {0}")]
	Validation(#[from] QuoteValidationError),

	#[error("{0}")]
	Adapter(#[from] AdapterError),
}

/// Validation errors for route requests
#[derive(Error, Debug)]
pub enum QuoteValidationError {
	#[error("Invalid slippage {value}: {reason}")]
	InvalidSlippage { value: f64, reason: String },

	#[error("Missing required field: {field}")]
	MissingField { field: String },
}

impl QuoteError {
	/// Human-readable message suitable for inline display
	pub fn message(&self) -> String {
		self.to_string()
	}
}
