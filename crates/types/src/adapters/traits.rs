//! Upstream client trait

use async_trait::async_trait;
use std::collections::HashMap;

use super::errors::AdapterResult;
use super::models::{RawChain, RawQuoteRequest, RawRoute, RawRoutesRequest, RawToken};
use crate::models::ChainId;

/// Client seam for the external routing/aggregation API.
///
/// The upstream service does its own route finding; implementations only
/// transport requests and parse responses. Route ranking is the upstream's
/// RECOMMENDED order and implementations must preserve it.
#[async_trait]
pub trait RouteProvider: Send + Sync {
	/// Fetch the candidate route list for a swap/bridge request
	async fn fetch_routes(&self, request: &RawRoutesRequest) -> AdapterResult<Vec<RawRoute>>;

	/// Fetch a single executable quote (fast path, no alternatives)
	async fn fetch_quote(&self, request: &RawQuoteRequest) -> AdapterResult<serde_json::Value>;

	/// Fetch the supported chain list
	async fn fetch_chains(&self) -> AdapterResult<Vec<RawChain>>;

	/// Fetch known tokens, keyed by chain id, optionally restricted to one
	/// chain
	async fn fetch_tokens(
		&self,
		chain_id: Option<&ChainId>,
	) -> AdapterResult<HashMap<String, Vec<RawToken>>>;

	/// Fetch available token-pair connections between two chains
	async fn fetch_connections(
		&self,
		from_chain: Option<&ChainId>,
		to_chain: Option<&ChainId>,
	) -> AdapterResult<serde_json::Value>;
}
