//! Privacy-chain bridge service
//!
//! Quotes bridge transfers touching the privacy chain, builds the wallet
//! payloads, queues relayer claims, and lists liquidity providers. Rates
//! come from a [`RateOracle`] and merchants from a [`MerchantRegistry`] so
//! the demo implementations can be swapped without touching the fee math.

use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::fees::{
	self, BridgeCallParams, SwapCallParams, PLATFORM_FEE_BPS,
};
use crossway_types::{
	BridgeError, BridgeFees, BridgeQuote, BridgeQuoteRequest, BridgeResult, BridgeRoute,
	BridgeStep, Merchant, MerchantRegistry, RateOracle, RelayerJob, RelayerRequest,
	TransitionRequest,
};

/// Bridge-fee estimate applied on top of the platform fee (0.1%)
const BRIDGE_FEE_RATE: f64 = 0.001;

/// Flat network-gas estimate folded into quotes, in whole tokens
const QUOTE_GAS_FEE: f64 = 0.1;

/// How long an issued quote remains executable
const QUOTE_VALIDITY_MS: i64 = 60_000;

/// Minutes until a queued relayer claim is expected to complete
const RELAY_COMPLETION_MINUTES: i64 = 15;

/// Bridge service configuration, mapped from the application settings
#[derive(Debug, Clone)]
pub struct BridgeConfig {
	/// Chain key identifying the privacy chain in requests
	pub chain_key: String,
	pub router_program: String,
	pub bridge_program: String,
	pub treasury_address: String,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			chain_key: "aleo".to_string(),
			router_program: "crossway_router.aleo".to_string(),
			bridge_program: "crossway_bridge.aleo".to_string(),
			treasury_address:
				"aleo1crosswaytreasury000000000000000000000000000000000000000000".to_string(),
		}
	}
}

/// Service for the privacy-chain bridge path
pub struct BridgeService {
	oracle: Arc<dyn RateOracle>,
	merchants: Arc<dyn MerchantRegistry>,
	config: BridgeConfig,
}

impl BridgeService {
	pub fn new(
		oracle: Arc<dyn RateOracle>,
		merchants: Arc<dyn MerchantRegistry>,
		config: BridgeConfig,
	) -> Self {
		Self {
			oracle,
			merchants,
			config,
		}
	}

	/// Quote a transfer; at least one side must be the privacy chain
	pub async fn quote(&self, request: &BridgeQuoteRequest) -> BridgeResult<BridgeQuote> {
		let is_source = request.from_chain.eq_ignore_ascii_case(&self.config.chain_key);
		let is_dest = request.to_chain.eq_ignore_ascii_case(&self.config.chain_key);

		if !is_source && !is_dest {
			return Err(BridgeError::UnsupportedRoute {
				reason: format!("at least one chain must be {}", self.config.chain_key),
			});
		}

		let amount: f64 = request
			.amount
			.trim()
			.parse()
			.map_err(|_| BridgeError::InvalidAmount {
				amount: request.amount.clone(),
				reason: "not a decimal number".to_string(),
			})?;
		if !amount.is_finite() || amount <= 0.0 {
			return Err(BridgeError::InvalidAmount {
				amount: request.amount.clone(),
				reason: "must be a positive finite amount".to_string(),
			});
		}

		let platform_fee = amount * PLATFORM_FEE_BPS as f64 / 10_000.0;
		let bridge_fee = amount * BRIDGE_FEE_RATE;
		let gas_fee = QUOTE_GAS_FEE;
		let net_amount = amount - platform_fee - bridge_fee - gas_fee;

		let rate = self
			.oracle
			.exchange_rate(&request.from_token, &request.to_token)
			.await
			.unwrap_or(1.0);
		let output_amount = net_amount * rate;
		let usd_rate = self.oracle.usd_rate(&request.to_token).await.unwrap_or(1.0);

		debug!(
			from = %request.from_chain,
			to = %request.to_chain,
			amount,
			rate,
			"priced bridge quote"
		);

		let mut steps = vec![
			BridgeStep {
				step_type: if is_source { "bridge" } else { "swap" }.to_string(),
				provider: "Crossway Router".to_string(),
				action: Some("Collect fee".to_string()),
				from_chain: None,
				to_chain: None,
			},
			BridgeStep {
				step_type: "bridge".to_string(),
				provider: "Verulink".to_string(),
				action: None,
				from_chain: Some(request.from_chain.clone()),
				to_chain: Some(request.to_chain.clone()),
			},
		];
		if is_dest {
			steps.push(BridgeStep {
				step_type: "claim".to_string(),
				provider: "Crossway Relayer".to_string(),
				action: Some("Auto-claim on destination".to_string()),
				from_chain: None,
				to_chain: None,
			});
		}

		Ok(BridgeQuote {
			id: format!("bridge-quote-{}", Uuid::new_v4()),
			from_chain: request.from_chain.clone(),
			to_chain: request.to_chain.clone(),
			from_token: request.from_token.clone(),
			to_token: request.to_token.clone(),
			from_amount: request.amount.clone(),
			to_amount: format!("{:.6}", output_amount),
			to_amount_usd: format!("{:.2}", output_amount * usd_rate),
			fees: BridgeFees {
				platform_fee: format!("{:.6}", platform_fee),
				platform_fee_bps: PLATFORM_FEE_BPS,
				bridge_fee: format!("{:.6}", bridge_fee),
				gas_fee: format!("{:.6}", gas_fee),
				total_fee: format!("{:.6}", platform_fee + bridge_fee + gas_fee),
			},
			estimated_time: if is_source {
				"15-20 minutes"
			} else {
				"10-15 minutes"
			}
			.to_string(),
			route: BridgeRoute { steps },
			valid_until: Utc::now().timestamp_millis() + QUOTE_VALIDITY_MS,
		})
	}

	/// Wallet payload for an in-chain router swap
	pub fn swap_payload(&self, params: &SwapCallParams) -> BridgeResult<TransitionRequest> {
		fees::swap_transition(params, &self.config.router_program)
	}

	/// Wallet payload for a bridge transfer
	pub fn bridge_payload(&self, params: &BridgeCallParams) -> BridgeResult<TransitionRequest> {
		fees::bridge_transition(params, &self.config.bridge_program)
	}

	/// Queue a relayer claim on the destination chain
	///
	/// No real submission happens yet; the job is acknowledged with an
	/// estimate so callers can show progress.
	pub fn relay(&self, request: &RelayerRequest) -> RelayerJob {
		let estimated_gas_cost = if request.destination_chain.eq_ignore_ascii_case("ethereum") {
			"0.005 ETH"
		} else {
			"0.001 MATIC"
		};

		let job = RelayerJob {
			status: "queued".to_string(),
			aleo_tx_id: request.aleo_tx_id.clone(),
			destination_chain: request.destination_chain.clone(),
			destination_address: request.destination_address.clone(),
			amount: request.amount.clone(),
			estimated_gas_cost: estimated_gas_cost.to_string(),
			estimated_completion: (Utc::now()
				+ ChronoDuration::minutes(RELAY_COMPLETION_MINUTES))
			.to_rfc3339(),
			relayer_job_id: format!("relay-{}", Uuid::new_v4()),
		};

		info!(
			job_id = %job.relayer_job_id,
			chain = %job.destination_chain,
			"queued relayer claim"
		);
		job
	}

	/// Registered liquidity providers
	pub async fn merchants(&self) -> BridgeResult<Vec<Merchant>> {
		self.merchants.merchants().await
	}

	pub fn config(&self) -> &BridgeConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::oracle::{StaticMerchantDirectory, StaticRateTable};

	fn service() -> BridgeService {
		BridgeService::new(
			Arc::new(StaticRateTable),
			Arc::new(StaticMerchantDirectory),
			BridgeConfig::default(),
		)
	}

	fn quote_request(from_chain: &str, to_chain: &str, amount: &str) -> BridgeQuoteRequest {
		BridgeQuoteRequest {
			from_chain: from_chain.to_string(),
			to_chain: to_chain.to_string(),
			from_token: "ALEO".to_string(),
			to_token: "USDC".to_string(),
			amount: amount.to_string(),
			from_address: None,
			to_address: None,
		}
	}

	#[tokio::test]
	async fn test_quote_requires_privacy_chain_side() {
		let error = service()
			.quote(&quote_request("ethereum", "polygon", "100"))
			.await
			.unwrap_err();
		assert!(matches!(error, BridgeError::UnsupportedRoute { .. }));
		assert!(error.is_client_error());
	}

	#[tokio::test]
	async fn test_quote_fee_breakdown() {
		let quote = service()
			.quote(&quote_request("aleo", "ethereum", "100"))
			.await
			.unwrap();

		// 100 ALEO: 0.5 platform (50 bps) + 0.1 bridge (0.1%) + 0.1 gas
		assert_eq!(quote.fees.platform_fee, "0.500000");
		assert_eq!(quote.fees.platform_fee_bps, 50);
		assert_eq!(quote.fees.bridge_fee, "0.100000");
		assert_eq!(quote.fees.gas_fee, "0.100000");
		assert_eq!(quote.fees.total_fee, "0.700000");

		// net 99.3 ALEO at the 1.5 USDC demo rate
		assert_eq!(quote.to_amount, "148.950000");
		assert_eq!(quote.estimated_time, "15-20 minutes");
	}

	#[tokio::test]
	async fn test_quote_route_shape_and_validity() {
		let quote = service()
			.quote(&quote_request("ethereum", "aleo", "10"))
			.await
			.unwrap();

		// Inbound transfers get the auto-claim leg
		assert_eq!(quote.route.steps.len(), 3);
		assert_eq!(quote.route.steps[0].step_type, "swap");
		assert_eq!(quote.route.steps[1].provider, "Verulink");
		assert_eq!(quote.route.steps[2].step_type, "claim");
		assert_eq!(quote.estimated_time, "10-15 minutes");

		let now = Utc::now().timestamp_millis();
		assert!(quote.valid_until > now);
		assert!(quote.valid_until <= now + QUOTE_VALIDITY_MS);
	}

	#[tokio::test]
	async fn test_quote_chain_key_is_case_insensitive() {
		assert!(service()
			.quote(&quote_request("Aleo", "ethereum", "1"))
			.await
			.is_ok());
	}

	#[tokio::test]
	async fn test_quote_rejects_bad_amounts() {
		for amount in ["abc", "-1", "0"] {
			let error = service()
				.quote(&quote_request("aleo", "ethereum", amount))
				.await
				.unwrap_err();
			assert!(matches!(error, BridgeError::InvalidAmount { .. }));
		}
	}

	#[test]
	fn test_relay_gas_estimate_by_chain() {
		let svc = service();
		let request = |chain: &str| RelayerRequest {
			aleo_tx_id: "at1abc".to_string(),
			destination_chain: chain.to_string(),
			destination_address: "0xdead".to_string(),
			amount: "5".to_string(),
		};

		assert_eq!(svc.relay(&request("ethereum")).estimated_gas_cost, "0.005 ETH");
		assert_eq!(svc.relay(&request("polygon")).estimated_gas_cost, "0.001 MATIC");
		assert_eq!(svc.relay(&request("ethereum")).status, "queued");
	}

	#[test]
	fn test_payloads_use_configured_programs() {
		let svc = service();
		let payload = svc
			.swap_payload(&SwapCallParams {
				amount: "10".to_string(),
				merchant_address: "aleo1merchant".to_string(),
				program_id: None,
			})
			.unwrap();
		assert_eq!(payload.transitions[0].program, "crossway_router.aleo");

		let payload = svc
			.bridge_payload(&BridgeCallParams {
				amount: "10".to_string(),
				destination_chain: "ethereum".to_string(),
				destination_address: "0xdead".to_string(),
				bridge_provider: "verulink".to_string(),
			})
			.unwrap();
		assert_eq!(payload.transitions[0].program, "crossway_bridge.aleo");
	}
}
