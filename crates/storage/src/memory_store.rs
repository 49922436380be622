//! In-memory storage implementation using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::traits::{Storage, StorageResult};
use crossway_types::{SwapSettings, TrackedTransaction};

/// In-memory store for session settings and tracked transactions
#[derive(Clone, Default)]
pub struct MemoryStore {
	settings: Arc<DashMap<String, SwapSettings>>,
	transactions: Arc<DashMap<String, TrackedTransaction>>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of sessions currently holding settings
	pub fn session_count(&self) -> usize {
		self.settings.len()
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn get_settings(&self, session_id: &str) -> StorageResult<Option<SwapSettings>> {
		Ok(self.settings.get(session_id).map(|entry| entry.clone()))
	}

	async fn put_settings(&self, session_id: &str, settings: SwapSettings) -> StorageResult<()> {
		debug!(session_id, "storing session settings");
		self.settings.insert(session_id.to_string(), settings);
		Ok(())
	}

	async fn record_transaction(&self, tx: TrackedTransaction) -> StorageResult<()> {
		self.transactions.insert(tx.tx_id.clone(), tx);
		Ok(())
	}

	async fn get_transaction(&self, tx_id: &str) -> StorageResult<Option<TrackedTransaction>> {
		Ok(self.transactions.get(tx_id).map(|entry| entry.clone()))
	}

	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossway_types::TransactionStatus;

	#[tokio::test]
	async fn test_settings_round_trip() {
		let store = MemoryStore::new();
		assert_eq!(store.get_settings("session-1").await.unwrap(), None);

		let mut settings = SwapSettings::default();
		settings.enabled_bridges.retain(|b| b != "hop");
		store
			.put_settings("session-1", settings.clone())
			.await
			.unwrap();

		let loaded = store.get_settings("session-1").await.unwrap().unwrap();
		assert_eq!(loaded, settings);
		assert_eq!(store.session_count(), 1);
	}

	#[tokio::test]
	async fn test_transaction_snapshots_overwrite() {
		let store = MemoryStore::new();
		store
			.record_transaction(TrackedTransaction::new(
				"at1xyz",
				TransactionStatus::pending(),
			))
			.await
			.unwrap();
		store
			.record_transaction(TrackedTransaction::new(
				"at1xyz",
				TransactionStatus::unknown("transport error"),
			))
			.await
			.unwrap();

		let tracked = store.get_transaction("at1xyz").await.unwrap().unwrap();
		assert_eq!(tracked.status, TransactionStatus::unknown("transport error"));
		assert!(store.get_transaction("missing").await.unwrap().is_none());
	}
}
