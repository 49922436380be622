//! Trait seams for the bridge path
//!
//! The demo rate table and merchant list sit behind these traits so a real
//! oracle or on-chain registry can be swapped in at the builder.

use async_trait::async_trait;

use super::{BridgeResult, Merchant, TransactionStatus};

/// Source of transaction status snapshots, polled by the confirmation
/// tracker
#[async_trait]
pub trait StatusSource: Send + Sync {
	async fn transaction_status(&self, tx_id: &str) -> BridgeResult<TransactionStatus>;
}

/// Pluggable price oracle used to turn a net bridged amount into the
/// destination token
#[async_trait]
pub trait RateOracle: Send + Sync {
	/// Exchange rate from one token symbol to another; `None` when the pair
	/// is unknown (callers fall back to 1.0)
	async fn exchange_rate(&self, from_token: &str, to_token: &str) -> Option<f64>;

	/// USD rate for a token symbol; `None` when unknown
	async fn usd_rate(&self, token: &str) -> Option<f64>;
}

/// Pluggable liquidity-registry lookup
#[async_trait]
pub trait MerchantRegistry: Send + Sync {
	async fn merchants(&self) -> BridgeResult<Vec<Merchant>>;
}
