//! Wire models for the upstream routing API
//!
//! These mirror the upstream JSON shapes exactly (camelCase, optional
//! fields tolerated) and are the input to the route normalizer. They are
//! never exposed on Crossway's own API surface.

use serde::{Deserialize, Serialize};

use crate::models::ChainId;

/// Raw route classification string marking the fastest route
pub const CLASSIFICATION_FASTEST: &str = "FASTEST";
/// Raw route classification string marking the cheapest route
pub const CLASSIFICATION_CHEAPEST: &str = "CHEAPEST";

/// One candidate route as returned by the upstream routing API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub from_amount_usd: String,
	#[serde(default)]
	pub to_amount_usd: String,
	pub to_amount: String,
	#[serde(default)]
	pub to_amount_min: String,
	#[serde(default)]
	pub gas_cost_usd: Option<String>,
	pub steps: Vec<RawStep>,
	/// Upstream classifications (e.g. FASTEST, CHEAPEST)
	#[serde(default)]
	pub tags: Option<Vec<String>>,
}

impl RawRoute {
	pub fn has_classification(&self, classification: &str) -> bool {
		self.tags
			.as_ref()
			.map(|tags| tags.iter().any(|t| t == classification))
			.unwrap_or(false)
	}
}

/// One leg of a raw route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
	#[serde(default)]
	pub id: String,
	/// `"cross"` for bridge legs, anything else is an in-chain swap
	#[serde(rename = "type")]
	pub step_type: String,
	#[serde(default)]
	pub tool: String,
	pub tool_details: ToolDetails,
	pub action: StepAction,
	pub estimate: StepEstimate,
}

/// Display metadata for the tool executing a step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDetails {
	#[serde(default)]
	pub key: String,
	pub name: String,
	#[serde(default)]
	pub logo_uri: String,
}

/// What a step does: which tokens move between which chains
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAction {
	pub from_chain_id: u64,
	pub to_chain_id: u64,
	pub from_token: RawToken,
	pub to_token: RawToken,
	#[serde(default)]
	pub from_amount: String,
}

/// Upstream estimate for a step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEstimate {
	#[serde(default)]
	pub to_amount: String,
	#[serde(default)]
	pub to_amount_min: String,
	/// Execution time in seconds
	#[serde(default)]
	pub execution_duration: f64,
	#[serde(default)]
	pub gas_costs: Option<Vec<GasCostEntry>>,
}

/// One gas cost entry of a step estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostEntry {
	#[serde(default)]
	pub amount_usd: Option<String>,
}

/// Token shape used inside upstream payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawToken {
	pub address: String,
	pub symbol: String,
	pub decimals: u8,
	pub chain_id: u64,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub logo_uri: Option<String>,
	#[serde(default, rename = "priceUSD")]
	pub price_usd: Option<String>,
}

/// Chain shape used by the upstream /chains endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChain {
	pub id: u64,
	#[serde(default)]
	pub key: String,
	pub name: String,
	#[serde(default)]
	pub logo_uri: String,
	#[serde(default)]
	pub mainnet: bool,
}

/// Parameters for a multi-route request (POST /advanced/routes upstream)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoutesRequest {
	pub from_chain_id: ChainId,
	pub to_chain_id: ChainId,
	pub from_token_address: String,
	pub to_token_address: String,
	/// Integer base-unit amount
	pub from_amount: String,
	pub from_address: String,
	pub slippage: f64,
	/// Upstream ordering; the aggregator always requests RECOMMENDED and
	/// preserves the returned order
	pub order: String,
}

/// Parameters for a single-quote request (GET /quote upstream)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuoteRequest {
	pub from_chain: ChainId,
	pub to_chain: ChainId,
	pub from_token: String,
	pub to_token: String,
	/// Integer base-unit amount
	pub from_amount: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_address: Option<String>,
	pub slippage: f64,
}
