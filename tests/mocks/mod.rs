//! Mock collaborators for integration tests
//!
//! Simple, working mocks that stand in for the upstream routing API and
//! the privacy-chain explorer without network access.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crossway_types::{
	AdapterError, AdapterResult, BridgeResult, ChainId, RawChain, RawQuoteRequest, RawRoute,
	RawRoutesRequest, RawToken, RouteProvider, StatusSource, TransactionStatus,
};

/// Route provider returning canned raw routes and counting calls
pub struct MockRouteProvider {
	calls: AtomicU32,
	routes: Vec<RawRoute>,
	fail_with: Option<String>,
}

impl MockRouteProvider {
	pub fn with_routes(routes: Vec<RawRoute>) -> Arc<Self> {
		Arc::new(Self {
			calls: AtomicU32::new(0),
			routes,
			fail_with: None,
		})
	}

	pub fn failing(message: &str) -> Arc<Self> {
		Arc::new(Self {
			calls: AtomicU32::new(0),
			routes: Vec::new(),
			fail_with: Some(message.to_string()),
		})
	}

	pub fn call_count(&self) -> u32 {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl RouteProvider for MockRouteProvider {
	async fn fetch_routes(&self, _request: &RawRoutesRequest) -> AdapterResult<Vec<RawRoute>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some(message) = &self.fail_with {
			return Err(AdapterError::Upstream {
				message: message.clone(),
			});
		}
		Ok(self.routes.clone())
	}

	async fn fetch_quote(&self, _request: &RawQuoteRequest) -> AdapterResult<serde_json::Value> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(serde_json::json!({
			"tool": "mock-dex",
			"transactionRequest": {"to": "0xrouter", "data": "0x", "value": "0"}
		}))
	}

	async fn fetch_chains(&self) -> AdapterResult<Vec<RawChain>> {
		Ok(vec![
			RawChain {
				id: 1,
				key: "eth".to_string(),
				name: "Ethereum".to_string(),
				logo_uri: String::new(),
				mainnet: true,
			},
			RawChain {
				id: 137,
				key: "pol".to_string(),
				name: "Polygon".to_string(),
				logo_uri: String::new(),
				mainnet: true,
			},
		])
	}

	async fn fetch_tokens(
		&self,
		_chain_id: Option<&ChainId>,
	) -> AdapterResult<HashMap<String, Vec<RawToken>>> {
		let mut tokens = HashMap::new();
		tokens.insert(
			"1".to_string(),
			vec![RawToken {
				address: "0x0000000000000000000000000000000000000000".to_string(),
				symbol: "ETH".to_string(),
				decimals: 18,
				chain_id: 1,
				name: "Ethereum".to_string(),
				logo_uri: None,
				price_usd: Some("3000".to_string()),
			}],
		);
		Ok(tokens)
	}

	async fn fetch_connections(
		&self,
		_from_chain: Option<&ChainId>,
		_to_chain: Option<&ChainId>,
	) -> AdapterResult<serde_json::Value> {
		Ok(serde_json::json!({"connections": []}))
	}
}

/// Status source replaying a fixed status for every lookup
pub struct MockStatusSource {
	calls: AtomicU32,
	status: TransactionStatus,
}

impl MockStatusSource {
	pub fn with_status(status: TransactionStatus) -> Arc<Self> {
		Arc::new(Self {
			calls: AtomicU32::new(0),
			status,
		})
	}

	pub fn call_count(&self) -> u32 {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl StatusSource for MockStatusSource {
	async fn transaction_status(&self, _tx_id: &str) -> BridgeResult<TransactionStatus> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.status.clone())
	}
}

/// A realistic two-route upstream payload: a fast bridge and a cheaper
/// two-leg alternative
pub fn sample_raw_routes() -> Vec<RawRoute> {
	serde_json::from_value(serde_json::json!([
		{
			"id": "0xroute-fast",
			"fromAmountUSD": "100.00",
			"toAmountUSD": "99.40",
			"toAmount": "99400000",
			"toAmountMin": "98900000",
			"tags": ["RECOMMENDED", "FASTEST"],
			"steps": [{
				"id": "s1",
				"type": "cross",
				"tool": "stargate",
				"toolDetails": {"key": "stargate", "name": "Stargate", "logoURI": ""},
				"action": {
					"fromChainId": 1,
					"toChainId": 137,
					"fromToken": {"address": "0x0", "symbol": "ETH", "decimals": 18, "chainId": 1},
					"toToken": {"address": "0xa0b8", "symbol": "USDC", "decimals": 6, "chainId": 137},
					"fromAmount": "1000000000000000000"
				},
				"estimate": {
					"toAmount": "99400000",
					"toAmountMin": "98900000",
					"executionDuration": 45,
					"gasCosts": [{"amountUSD": "2.10"}]
				}
			}]
		},
		{
			"id": "0xroute-cheap",
			"fromAmountUSD": "100.00",
			"toAmountUSD": "99.80",
			"toAmount": "99812345",
			"toAmountMin": "99000000",
			"tags": ["CHEAPEST"],
			"steps": [
				{
					"id": "s2",
					"type": "swap",
					"tool": "uniswap",
					"toolDetails": {"key": "uniswap", "name": "Uniswap", "logoURI": ""},
					"action": {
						"fromChainId": 1,
						"toChainId": 1,
						"fromToken": {"address": "0x0", "symbol": "ETH", "decimals": 18, "chainId": 1},
						"toToken": {"address": "0xusdc1", "symbol": "USDC", "decimals": 6, "chainId": 1},
						"fromAmount": "1000000000000000000"
					},
					"estimate": {
						"toAmount": "99900000",
						"toAmountMin": "99500000",
						"executionDuration": 30,
						"gasCosts": [{"amountUSD": "0.80"}]
					}
				},
				{
					"id": "s3",
					"type": "cross",
					"tool": "across",
					"toolDetails": {"key": "across", "name": "Across", "logoURI": ""},
					"action": {
						"fromChainId": 1,
						"toChainId": 137,
						"fromToken": {"address": "0xusdc1", "symbol": "USDC", "decimals": 6, "chainId": 1},
						"toToken": {"address": "0xa0b8", "symbol": "USDC", "decimals": 6, "chainId": 137},
						"fromAmount": "99900000"
					},
					"estimate": {
						"toAmount": "99812345",
						"toAmountMin": "99000000",
						"executionDuration": 95,
						"gasCosts": [{"amountUSD": "0.40"}]
					}
				}
			]
		}
	]))
	.expect("sample routes are valid")
}
