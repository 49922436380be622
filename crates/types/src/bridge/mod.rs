//! Privacy-chain bridge models
//!
//! Response shapes for the Aleo bridge path: quotes with an explicit fee
//! breakdown, transaction status snapshots, relayer jobs, and the
//! transaction payloads submitted through the wallet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;
pub mod traits;

pub use errors::{BridgeError, BridgeResult};
pub use traits::{MerchantRegistry, RateOracle, StatusSource};

/// Request body for POST /api/v1/bridge/quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuoteRequest {
	pub from_chain: String,
	pub to_chain: String,
	pub from_token: String,
	pub to_token: String,
	/// Human-decimal amount in the source token
	pub amount: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_address: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_address: Option<String>,
}

/// Fee breakdown attached to every bridge quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BridgeFees {
	pub platform_fee: String,
	pub platform_fee_bps: u64,
	pub bridge_fee: String,
	pub gas_fee: String,
	pub total_fee: String,
}

/// One step of a bridge quote's route description
///
/// These are presentation steps for the quote screen, looser than
/// [`crate::routes::SwapStep`]: the claim leg has its own type string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BridgeStep {
	#[serde(rename = "type")]
	pub step_type: String,
	pub provider: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_chain: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_chain: Option<String>,
}

/// Route description inside a bridge quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BridgeRoute {
	pub steps: Vec<BridgeStep>,
}

/// A priced bridge quote with a short validity horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuote {
	pub id: String,
	pub from_chain: String,
	pub to_chain: String,
	pub from_token: String,
	pub to_token: String,
	pub from_amount: String,
	pub to_amount: String,
	pub to_amount_usd: String,
	pub fees: BridgeFees,
	pub estimated_time: String,
	pub route: BridgeRoute,
	/// Epoch milliseconds; quotes expire 60 seconds after issuance
	pub valid_until: i64,
}

/// Transaction lifecycle states
///
/// `Unknown` also covers transport errors and polling timeouts; callers
/// must not conflate it with a confirmed `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
	Pending,
	Confirmed,
	Failed,
	Unknown,
}

impl TxStatus {
	/// Terminal states stop confirmation polling immediately
	pub fn is_terminal(&self) -> bool {
		matches!(self, TxStatus::Confirmed | TxStatus::Failed)
	}
}

/// Status snapshot for a privacy-chain transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
	pub status: TxStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub block_height: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timestamp: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fee: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl TransactionStatus {
	pub fn pending() -> Self {
		Self {
			status: TxStatus::Pending,
			block_height: None,
			timestamp: None,
			fee: None,
			error: None,
			message: None,
		}
	}

	pub fn pending_with_message(message: impl Into<String>) -> Self {
		Self {
			message: Some(message.into()),
			..Self::pending()
		}
	}

	pub fn unknown(error: impl Into<String>) -> Self {
		Self {
			status: TxStatus::Unknown,
			error: Some(error.into()),
			..Self::pending()
		}
	}

	pub fn is_terminal(&self) -> bool {
		self.status.is_terminal()
	}
}

/// Request body for POST /api/v1/bridge/transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusRequest {
	pub tx_id: String,
	pub action: String,
}

/// Request body for POST /api/v1/bridge/relayer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RelayerRequest {
	pub aleo_tx_id: String,
	pub destination_chain: String,
	pub destination_address: String,
	pub amount: String,
}

/// A queued relayer claim job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RelayerJob {
	pub status: String,
	pub aleo_tx_id: String,
	pub destination_chain: String,
	pub destination_address: String,
	pub amount: String,
	pub estimated_gas_cost: String,
	pub estimated_completion: String,
	pub relayer_job_id: String,
}

/// A registered liquidity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
	pub address: String,
	pub name: String,
	pub liquidity: String,
	pub fee_markup_bps: u64,
	pub active: bool,
}

/// One program transition inside a wallet transaction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Transition {
	pub program: String,
	pub function_name: String,
	pub inputs: Vec<String>,
}

/// Transaction payload handed to the privacy-chain wallet for signing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
	pub transitions: Vec<Transition>,
	/// Flat network-gas reservation in microunits
	pub fee: u64,
	pub fee_private: bool,
}

/// Last observed state of a tracked transaction, kept in storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedTransaction {
	pub tx_id: String,
	pub status: TransactionStatus,
	pub updated_at: DateTime<Utc>,
}

impl TrackedTransaction {
	pub fn new(tx_id: impl Into<String>, status: TransactionStatus) -> Self {
		Self {
			tx_id: tx_id.into(),
			status,
			updated_at: Utc::now(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_terminal_states() {
		assert!(TxStatus::Confirmed.is_terminal());
		assert!(TxStatus::Failed.is_terminal());
		assert!(!TxStatus::Pending.is_terminal());
		assert!(!TxStatus::Unknown.is_terminal());
	}

	#[test]
	fn test_status_wire_names_are_lowercase() {
		let status = TransactionStatus::unknown("timeout");
		let json = serde_json::to_value(&status).unwrap();
		assert_eq!(json["status"], "unknown");
		assert_eq!(json["error"], "timeout");
		assert!(json.get("blockHeight").is_none());
	}

	#[test]
	fn test_pending_default_shape() {
		let status: TransactionStatus =
			serde_json::from_value(serde_json::json!({"status": "pending"})).unwrap();
		assert_eq!(status, TransactionStatus::pending());
	}
}
