//! Storage trait definitions

use async_trait::async_trait;
use thiserror::Error;

use crossway_types::{SwapSettings, TrackedTransaction};

/// Storage operation errors
#[derive(Error, Debug)]
pub enum StorageError {
	#[error("Not found: {key}")]
	NotFound { key: String },

	#[error("Storage backend error: {reason}")]
	Backend { reason: String },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Combined storage interface used by the API layer
#[async_trait]
pub trait Storage: Send + Sync {
	/// Settings for a session, if the session has stored any
	async fn get_settings(&self, session_id: &str) -> StorageResult<Option<SwapSettings>>;

	/// Replace a session's settings wholesale
	async fn put_settings(&self, session_id: &str, settings: SwapSettings) -> StorageResult<()>;

	/// Record the latest observed status for a transaction
	async fn record_transaction(&self, tx: TrackedTransaction) -> StorageResult<()>;

	/// Last observed status snapshot for a transaction
	async fn get_transaction(&self, tx_id: &str) -> StorageResult<Option<TrackedTransaction>>;

	/// Backend liveness check
	async fn health_check(&self) -> StorageResult<bool>;
}
