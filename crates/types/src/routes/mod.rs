//! Normalized swap route models
//!
//! A `SwapRoute` is a value object: it is rebuilt from scratch on every
//! quote request and never mutated once returned to a caller.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::models::Token;

/// Kind of a single route leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
	Swap,
	Bridge,
}

/// One leg of a route; order within `SwapRoute::steps` is execution order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SwapStep {
	#[serde(rename = "type")]
	pub kind: StepKind,
	/// Display name of the tool executing this leg
	pub provider: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_token: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_token: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_chain: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_chain: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain: Option<String>,
}

/// Display tag attached to a route by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum RouteTag {
	#[serde(rename = "Best Return")]
	BestReturn,
	Fastest,
	Cheapest,
}

/// A complete executable route from a source token to a destination token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SwapRoute {
	pub id: String,
	pub from_token: Token,
	pub to_token: Token,
	/// Input amount in the source token's human-decimal units
	pub from_amount: String,
	/// Output amount in the destination token's human-decimal units
	/// (display form, six fractional digits)
	pub to_amount: String,
	pub to_amount_usd: String,
	pub gas_cost: String,
	pub gas_cost_usd: String,
	pub estimated_time: String,
	/// Non-empty for any executable route
	pub steps: Vec<SwapStep>,
	/// Absent (not an empty list) when no tag applies; consumers branch on
	/// presence
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<RouteTag>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub percentage_diff: Option<String>,
}

impl SwapRoute {
	/// Whether the route crosses chains at any leg
	pub fn is_cross_chain(&self) -> bool {
		self.steps.iter().any(|s| s.kind == StepKind::Bridge)
	}

	pub fn has_tag(&self, tag: RouteTag) -> bool {
		self.tags
			.as_ref()
			.map(|tags| tags.contains(&tag))
			.unwrap_or(false)
	}
}
