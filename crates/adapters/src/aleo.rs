//! Privacy-chain explorer client
//!
//! Looks up transaction status on the Aleo explorer API. A transaction the
//! explorer has not indexed yet reports `pending`, not an error; transport
//! failures report `unknown` so callers can keep polling.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crossway_types::{
	AdapterError, AdapterResult, BridgeResult, StatusSource, TransactionStatus, TxStatus,
};

/// Raw transaction record shape returned by the explorer
#[derive(Debug, Deserialize)]
struct ExplorerTransaction {
	#[serde(default)]
	status: Option<String>,
	#[serde(default)]
	block_height: Option<u64>,
	#[serde(default)]
	timestamp: Option<serde_json::Value>,
	#[serde(default)]
	fee: Option<serde_json::Value>,
}

fn stringify(value: serde_json::Value) -> String {
	match value {
		serde_json::Value::String(s) => s,
		other => other.to_string(),
	}
}

impl ExplorerTransaction {
	fn into_status(self) -> TransactionStatus {
		// Missing status means the record is in a finalized block
		let status = match self.status.as_deref() {
			Some("pending") => TxStatus::Pending,
			Some("failed") | Some("rejected") => TxStatus::Failed,
			_ => TxStatus::Confirmed,
		};

		TransactionStatus {
			status,
			block_height: self.block_height,
			timestamp: self.timestamp.map(stringify),
			fee: self.fee.map(stringify),
			error: None,
			message: None,
		}
	}
}

/// Explorer API client for the privacy chain
#[derive(Debug, Clone)]
pub struct AleoExplorerClient {
	client: Client,
	base_url: String,
	network: String,
}

impl AleoExplorerClient {
	pub fn new(
		base_url: impl Into<String>,
		network: impl Into<String>,
		request_timeout_ms: u64,
	) -> AdapterResult<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(request_timeout_ms))
			.build()
			.map_err(AdapterError::HttpError)?;

		Ok(Self {
			client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			network: network.into(),
		})
	}

	fn transaction_url(&self, tx_id: &str) -> String {
		format!("{}/{}/transaction/{}", self.base_url, self.network, tx_id)
	}
}

#[async_trait]
impl StatusSource for AleoExplorerClient {
	async fn transaction_status(&self, tx_id: &str) -> BridgeResult<TransactionStatus> {
		let url = self.transaction_url(tx_id);
		debug!(tx_id, "querying explorer for transaction status");

		let response = match self.client.get(&url).send().await {
			Ok(response) => response,
			Err(e) => {
				warn!(tx_id, error = %e, "explorer request failed");
				return Ok(TransactionStatus::unknown(e.to_string()));
			},
		};

		if !response.status().is_success() {
			return Ok(TransactionStatus::pending_with_message(
				"Transaction not yet indexed",
			));
		}

		match response.json::<ExplorerTransaction>().await {
			Ok(tx) => Ok(tx.into_status()),
			Err(e) => {
				warn!(tx_id, error = %e, "explorer returned unparseable transaction");
				Ok(TransactionStatus::unknown(format!(
					"failed to parse explorer response: {}",
					e
				)))
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transaction_url_shape() {
		let client =
			AleoExplorerClient::new("https://api.explorer.example/v1/", "testnet", 10_000).unwrap();
		assert_eq!(
			client.transaction_url("at1abc"),
			"https://api.explorer.example/v1/testnet/transaction/at1abc"
		);
	}

	#[test]
	fn test_indexed_transaction_defaults_to_confirmed() {
		let tx: ExplorerTransaction = serde_json::from_value(serde_json::json!({
			"block_height": 42,
			"fee": 0.001
		}))
		.unwrap();
		let status = tx.into_status();
		assert_eq!(status.status, TxStatus::Confirmed);
		assert_eq!(status.block_height, Some(42));
		assert_eq!(status.fee.as_deref(), Some("0.001"));
	}

	#[test]
	fn test_explicit_statuses_map_through() {
		let tx: ExplorerTransaction =
			serde_json::from_value(serde_json::json!({"status": "pending"})).unwrap();
		assert_eq!(tx.into_status().status, TxStatus::Pending);

		let tx: ExplorerTransaction =
			serde_json::from_value(serde_json::json!({"status": "rejected"})).unwrap();
		assert_eq!(tx.into_status().status, TxStatus::Failed);
	}
}
