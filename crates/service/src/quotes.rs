//! Quote orchestration
//!
//! Drives a route request end to end: no-op gate, base-unit conversion,
//! upstream fetch, normalization, tagging. A monotonic sequence number
//! guards against out-of-order completions so the freshest request always
//! wins, regardless of response arrival order.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::normalizer::normalize_routes;
use crate::tagger::tag_routes;
use crossway_types::{
	to_base_units, Chain, ChainId, QuoteResult, RawQuoteRequest, RawRoutesRequest, RouteProvider,
	RouteRequest, RoutesOutcome, Token,
};

/// Sender address used upstream when the caller has not connected a wallet
const PLACEHOLDER_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Upstream ordering requested for every route list
const RECOMMENDED_ORDER: &str = "RECOMMENDED";

/// Service producing normalized, tagged route lists
pub struct QuoteService {
	provider: Arc<dyn RouteProvider>,
	default_slippage: f64,
	sequence: AtomicU64,
	in_flight: AtomicUsize,
}

impl QuoteService {
	pub fn new(provider: Arc<dyn RouteProvider>, default_slippage: f64) -> Self {
		Self {
			provider,
			default_slippage,
			sequence: AtomicU64::new(0),
			in_flight: AtomicUsize::new(0),
		}
	}

	/// Whether any quote request is currently outstanding
	pub fn is_loading(&self) -> bool {
		self.in_flight.load(Ordering::SeqCst) > 0
	}

	/// Fetch, normalize, and tag the candidate routes for a request
	///
	/// A zero, missing, or malformed amount is a valid "no quote needed
	/// yet" state: it returns an empty route list without touching the
	/// network. A completion that lost the sequence race to a newer call
	/// returns [`RoutesOutcome::Superseded`] instead of stale routes.
	pub async fn get_routes(&self, request: &RouteRequest) -> QuoteResult<RoutesOutcome> {
		request.validate()?;
		let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

		let base_amount = to_base_units(&request.from_amount, request.from_token.decimals);
		let parsed_amount: f64 = request.from_amount.parse().unwrap_or(0.0);
		if base_amount == "0" || parsed_amount <= 0.0 {
			debug!(amount = %request.from_amount, "no quote needed for empty or zero amount");
			return Ok(RoutesOutcome::Routes(Vec::new()));
		}

		let raw_request = RawRoutesRequest {
			from_chain_id: request.from_token.chain_id.clone(),
			to_chain_id: request.to_token.chain_id.clone(),
			from_token_address: request.from_token.address.clone(),
			to_token_address: request.to_token.address.clone(),
			from_amount: base_amount,
			from_address: request
				.from_address
				.clone()
				.unwrap_or_else(|| PLACEHOLDER_ADDRESS.to_string()),
			slippage: request.slippage.unwrap_or(self.default_slippage),
			order: RECOMMENDED_ORDER.to_string(),
		};

		self.in_flight.fetch_add(1, Ordering::SeqCst);
		let result = self.provider.fetch_routes(&raw_request).await;
		self.in_flight.fetch_sub(1, Ordering::SeqCst);

		// A newer request was issued while this one was outstanding; its
		// completion owns the display now, success or failure alike.
		if self.sequence.load(Ordering::SeqCst) != ticket {
			debug!(ticket, "discarding superseded quote completion");
			return Ok(RoutesOutcome::Superseded);
		}

		let raws = result?;
		let mut routes = normalize_routes(&raws, request);
		tag_routes(&mut routes, &raws);

		info!(
			count = routes.len(),
			from = %request.from_token.symbol,
			to = %request.to_token.symbol,
			"normalized candidate routes"
		);
		Ok(RoutesOutcome::Routes(routes))
	}

	/// Single-quote fast path; the upstream payload passes through verbatim
	pub async fn get_quote(&self, request: &RouteRequest) -> QuoteResult<serde_json::Value> {
		request.validate()?;
		let raw_request = RawQuoteRequest {
			from_chain: request.from_token.chain_id.clone(),
			to_chain: request.to_token.chain_id.clone(),
			from_token: request.from_token.address.clone(),
			to_token: request.to_token.address.clone(),
			from_amount: to_base_units(&request.from_amount, request.from_token.decimals),
			from_address: request.from_address.clone(),
			slippage: request.slippage.unwrap_or(self.default_slippage),
		};
		Ok(self.provider.fetch_quote(&raw_request).await?)
	}

	/// Supported chains as domain models
	pub async fn chains(&self) -> QuoteResult<Vec<Chain>> {
		let chains = self
			.provider
			.fetch_chains()
			.await?
			.into_iter()
			.map(|c| Chain {
				id: ChainId::Numeric(c.id),
				name: c.name,
				icon: c.logo_uri,
			})
			.collect();
		Ok(chains)
	}

	/// Known tokens as domain models, flattened across chains
	pub async fn tokens(&self, chain_id: Option<&ChainId>) -> QuoteResult<Vec<Token>> {
		let by_chain = self.provider.fetch_tokens(chain_id).await?;

		let mut tokens = Vec::new();
		for (chain_key, raw_tokens) in by_chain {
			let chain_id = match chain_key.parse::<u64>() {
				Ok(id) => ChainId::Numeric(id),
				Err(_) => ChainId::Key(chain_key),
			};
			for raw in raw_tokens {
				tokens.push(Token {
					symbol: raw.symbol,
					name: raw.name,
					icon: raw.logo_uri.unwrap_or_default(),
					chain_id: chain_id.clone(),
					address: raw.address,
					decimals: raw.decimals,
					balance: None,
					usd_value: raw.price_usd,
				});
			}
		}
		Ok(tokens)
	}

	/// Token-pair connections between two chains, passed through verbatim
	pub async fn connections(
		&self,
		from_chain: Option<&ChainId>,
		to_chain: Option<&ChainId>,
	) -> QuoteResult<serde_json::Value> {
		Ok(self.provider.fetch_connections(from_chain, to_chain).await?)
	}
}

/// Quiet-period helper for amount-input driven refreshes
///
/// Each `settle` call starts a new generation and sleeps the configured
/// delay; it resolves `true` only if no newer call arrived meanwhile.
/// Callers skip issuing a quote when settle reports `false`.
pub struct Debouncer {
	delay: Duration,
	generation: AtomicU64,
}

impl Debouncer {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			generation: AtomicU64::new(0),
		}
	}

	pub async fn settle(&self) -> bool {
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
		tokio::time::sleep(self.delay).await;
		self.generation.load(Ordering::SeqCst) == generation
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use crossway_types::{
		AdapterError, AdapterResult, QuoteError, RawChain, RawRoute, RawToken,
	};
	use std::collections::HashMap;
	use std::sync::atomic::AtomicU32;

	/// Provider returning canned routes, counting calls, optionally failing
	/// or delaying per call
	struct MockProvider {
		calls: AtomicU32,
		routes: Vec<RawRoute>,
		fail_with: Option<String>,
		/// Per-call delays; calls beyond the list complete immediately
		delays_ms: Vec<u64>,
	}

	impl MockProvider {
		fn with_routes(routes: Vec<RawRoute>) -> Self {
			Self {
				calls: AtomicU32::new(0),
				routes,
				fail_with: None,
				delays_ms: Vec::new(),
			}
		}

		fn failing(message: &str) -> Self {
			Self {
				fail_with: Some(message.to_string()),
				..Self::with_routes(Vec::new())
			}
		}

		fn call_count(&self) -> u32 {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl RouteProvider for MockProvider {
		async fn fetch_routes(&self, _request: &RawRoutesRequest) -> AdapterResult<Vec<RawRoute>> {
			let call = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
			if let Some(delay) = self.delays_ms.get(call) {
				tokio::time::sleep(Duration::from_millis(*delay)).await;
			}
			if let Some(message) = &self.fail_with {
				return Err(AdapterError::Upstream {
					message: message.clone(),
				});
			}
			Ok(self.routes.clone())
		}

		async fn fetch_quote(
			&self,
			_request: &RawQuoteRequest,
		) -> AdapterResult<serde_json::Value> {
			Ok(serde_json::json!({"tool": "mock"}))
		}

		async fn fetch_chains(&self) -> AdapterResult<Vec<RawChain>> {
			Ok(Vec::new())
		}

		async fn fetch_tokens(
			&self,
			_chain_id: Option<&ChainId>,
		) -> AdapterResult<HashMap<String, Vec<RawToken>>> {
			Ok(HashMap::new())
		}

		async fn fetch_connections(
			&self,
			_from_chain: Option<&ChainId>,
			_to_chain: Option<&ChainId>,
		) -> AdapterResult<serde_json::Value> {
			Ok(serde_json::json!({"connections": []}))
		}
	}

	fn raw_route(id: &str) -> RawRoute {
		RawRoute {
			id: id.to_string(),
			from_amount_usd: "100".to_string(),
			to_amount_usd: "99".to_string(),
			to_amount: "99000000".to_string(),
			to_amount_min: "98000000".to_string(),
			gas_cost_usd: None,
			steps: Vec::new(),
			tags: None,
		}
	}

	fn request(amount: &str) -> RouteRequest {
		RouteRequest {
			from_token: Token::new("ETH", "Ethereum", 1u64, "0x0", 18),
			to_token: Token::new("USDC", "USD Coin", 137u64, "0xa0b8", 6),
			from_amount: amount.to_string(),
			from_address: None,
			slippage: None,
		}
	}

	#[tokio::test]
	async fn test_zero_amount_short_circuits_without_network_call() {
		let provider = Arc::new(MockProvider::with_routes(vec![raw_route("a")]));
		let service = QuoteService::new(provider.clone(), 0.03);

		for amount in ["0", "", "0.000", "abc", "-1"] {
			let outcome = service.get_routes(&request(amount)).await.unwrap();
			assert_eq!(outcome, RoutesOutcome::Routes(Vec::new()), "amount {:?}", amount);
		}
		assert_eq!(provider.call_count(), 0);
		assert!(!service.is_loading());
	}

	#[tokio::test]
	async fn test_routes_are_normalized_and_tagged() {
		let provider = Arc::new(MockProvider::with_routes(vec![
			raw_route("a"),
			raw_route("b"),
		]));
		let service = QuoteService::new(provider.clone(), 0.03);

		let routes = service
			.get_routes(&request("1.5"))
			.await
			.unwrap()
			.routes()
			.unwrap();

		assert_eq!(routes.len(), 2);
		assert!(routes[0].has_tag(crossway_types::RouteTag::BestReturn));
		assert!(routes[1].tags.is_none());
		assert_eq!(provider.call_count(), 1);
	}

	#[tokio::test]
	async fn test_upstream_error_surfaces_with_message() {
		let provider = Arc::new(MockProvider::failing("insufficient liquidity"));
		let service = QuoteService::new(provider, 0.03);

		let error = service.get_routes(&request("1")).await.unwrap_err();
		assert!(matches!(error, QuoteError::Adapter(_)));
		assert!(error.to_string().contains("insufficient liquidity"));
	}

	#[tokio::test(start_paused = true)]
	async fn test_stale_completion_is_superseded() {
		// First call resolves slowly, second quickly: the slow completion
		// arrives last but must not win.
		let provider = Arc::new(MockProvider {
			delays_ms: vec![200, 50],
			..MockProvider::with_routes(vec![raw_route("a")])
		});
		let service = Arc::new(QuoteService::new(provider.clone(), 0.03));

		let first = {
			let service = Arc::clone(&service);
			tokio::spawn(async move { service.get_routes(&request("1")).await })
		};
		tokio::task::yield_now().await;
		let second = {
			let service = Arc::clone(&service);
			tokio::spawn(async move { service.get_routes(&request("2")).await })
		};

		let first = first.await.unwrap().unwrap();
		let second = second.await.unwrap().unwrap();

		assert_eq!(first, RoutesOutcome::Superseded);
		assert!(matches!(second, RoutesOutcome::Routes(ref routes) if routes.len() == 1));
		assert_eq!(provider.call_count(), 2);
	}

	#[tokio::test(start_paused = true)]
	async fn test_debouncer_only_latest_settles() {
		let debouncer = Arc::new(Debouncer::new(Duration::from_millis(500)));

		let stale = {
			let debouncer = Arc::clone(&debouncer);
			tokio::spawn(async move { debouncer.settle().await })
		};
		tokio::task::yield_now().await;
		let fresh = {
			let debouncer = Arc::clone(&debouncer);
			tokio::spawn(async move { debouncer.settle().await })
		};

		assert!(!stale.await.unwrap());
		assert!(fresh.await.unwrap());
	}
}
