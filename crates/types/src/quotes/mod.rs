//! Route request model and quote outcomes

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;

pub use errors::{QuoteError, QuoteValidationError};

use crate::models::Token;
use crate::routes::SwapRoute;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Result type for quote validation operations
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;

/// Default slippage tolerance applied when a request does not specify one
pub const DEFAULT_SLIPPAGE: f64 = 0.03;

/// API request body for POST /api/v1/routes
///
/// Full token objects travel with the request so the decimal counts needed
/// for base-unit conversion never have to be looked up server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
	pub from_token: Token,
	pub to_token: Token,
	/// Input amount in the source token's human-decimal units
	pub from_amount: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_address: Option<String>,
	/// Slippage tolerance as a fraction; defaults to [`DEFAULT_SLIPPAGE`]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slippage: Option<f64>,
}

impl RouteRequest {
	/// Validate the request before it reaches the upstream client
	///
	/// The amount itself is deliberately not validated here: a zero or
	/// malformed amount is a valid "no quote needed yet" state handled by
	/// the quote service, not a request error.
	pub fn validate(&self) -> QuoteValidationResult<()> {
		if self.from_token.address.is_empty() {
			return Err(QuoteValidationError::MissingField {
				field: "fromToken.address".to_string(),
			});
		}
		if self.to_token.address.is_empty() {
			return Err(QuoteValidationError::MissingField {
				field: "toToken.address".to_string(),
			});
		}
		if let Some(slippage) = self.slippage {
			if !slippage.is_finite() || slippage <= 0.0 || slippage >= 1.0 {
				return Err(QuoteValidationError::InvalidSlippage {
					value: slippage,
					reason: "must be a fraction strictly between 0 and 1".to_string(),
				});
			}
		}
		Ok(())
	}

	/// Slippage to use for this request
	pub fn slippage_or_default(&self) -> f64 {
		self.slippage.unwrap_or(DEFAULT_SLIPPAGE)
	}
}

/// Outcome of a routes request
///
/// `Superseded` marks a completion that lost the sequence race to a newer
/// request; its contents were discarded and must not be displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutesOutcome {
	Routes(Vec<SwapRoute>),
	Superseded,
}

impl RoutesOutcome {
	pub fn routes(self) -> Option<Vec<SwapRoute>> {
		match self {
			RoutesOutcome::Routes(routes) => Some(routes),
			RoutesOutcome::Superseded => None,
		}
	}
}

/// API response body for POST /api/v1/routes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RoutesResponse {
	pub routes: Vec<SwapRoute>,
}
