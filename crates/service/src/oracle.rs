//! Demo oracle and merchant directory
//!
//! Static implementations of the pluggable seams the bridge service quotes
//! against. Production deployments swap these for a live oracle and an
//! on-chain registry at the builder.

use async_trait::async_trait;

use crossway_types::{BridgeResult, Merchant, MerchantRegistry, RateOracle};

/// Hardcoded exchange-rate table for demo quotes
#[derive(Debug, Default, Clone)]
pub struct StaticRateTable;

#[async_trait]
impl RateOracle for StaticRateTable {
	async fn exchange_rate(&self, from_token: &str, to_token: &str) -> Option<f64> {
		let rate = match (
			from_token.to_ascii_uppercase().as_str(),
			to_token.to_ascii_uppercase().as_str(),
		) {
			("ALEO", "ETH") => 0.0005,
			("ALEO", "USDC") => 1.5,
			("ALEO", "MATIC") => 2.0,
			("ETH", "ALEO") => 2000.0,
			("ETH", "USDC") => 3000.0,
			("ETH", "MATIC") => 1500.0,
			("USDC", "ALEO") => 0.67,
			("USDC", "ETH") => 0.00033,
			("USDC", "MATIC") => 1.1,
			("MATIC", "ALEO") => 0.5,
			("MATIC", "ETH") => 0.00066,
			("MATIC", "USDC") => 0.9,
			_ => return None,
		};
		Some(rate)
	}

	async fn usd_rate(&self, token: &str) -> Option<f64> {
		let rate = match token.to_ascii_uppercase().as_str() {
			"ALEO" => 1.5,
			"ETH" => 3000.0,
			"USDC" => 1.0,
			"MATIC" => 0.9,
			_ => return None,
		};
		Some(rate)
	}
}

/// Static liquidity-provider list for demo responses
#[derive(Debug, Default, Clone)]
pub struct StaticMerchantDirectory;

#[async_trait]
impl MerchantRegistry for StaticMerchantDirectory {
	async fn merchants(&self) -> BridgeResult<Vec<Merchant>> {
		Ok(vec![
			Merchant {
				address:
					"aleo1merchant1000000000000000000000000000000000000000000000000".to_string(),
				name: "Liquidity Provider A".to_string(),
				liquidity: "50000".to_string(),
				fee_markup_bps: 20,
				active: true,
			},
			Merchant {
				address:
					"aleo1merchant2000000000000000000000000000000000000000000000000".to_string(),
				name: "Liquidity Provider B".to_string(),
				liquidity: "25000".to_string(),
				fee_markup_bps: 15,
				active: true,
			},
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_rate_lookup_is_case_insensitive() {
		let oracle = StaticRateTable;
		assert_eq!(oracle.exchange_rate("aleo", "usdc").await, Some(1.5));
		assert_eq!(oracle.exchange_rate("ALEO", "USDC").await, Some(1.5));
		assert_eq!(oracle.exchange_rate("ALEO", "DOGE").await, None);
	}

	#[tokio::test]
	async fn test_merchant_directory_lists_active_providers() {
		let directory = StaticMerchantDirectory;
		let merchants = directory.merchants().await.unwrap();
		assert_eq!(merchants.len(), 2);
		assert!(merchants.iter().all(|m| m.active));
	}
}
