//! Transaction confirmation tracking
//!
//! Polls a [`StatusSource`] at a fixed interval until the transaction
//! reaches a terminal state or the attempt budget runs out. A stop token
//! threads through the loop so a caller that loses interest can end the
//! polling instead of leaving it running to completion.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

use crossway_types::{StatusSource, TransactionStatus};

/// Polling behavior configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
	/// Delay between consecutive status polls
	pub interval: Duration,
	/// Maximum polls before reporting unknown
	pub max_attempts: u32,
}

impl Default for TrackerConfig {
	fn default() -> Self {
		Self {
			interval: Duration::from_secs(10),
			max_attempts: 30,
		}
	}
}

/// Handle that cancels an in-flight confirmation wait
///
/// Dropping the handle does not cancel; only an explicit [`stop`] does, so
/// fire-and-forget callers keep run-to-completion behavior.
///
/// [`stop`]: StopHandle::stop
#[derive(Debug, Clone)]
pub struct StopHandle {
	tx: watch::Sender<bool>,
}

impl StopHandle {
	pub fn stop(&self) {
		let _ = self.tx.send(true);
	}
}

/// Receiver side of a stop signal
#[derive(Debug, Clone)]
pub struct StopToken {
	rx: watch::Receiver<bool>,
}

impl StopToken {
	/// A token that never signals
	pub fn never() -> Self {
		let (_tx, rx) = watch::channel(false);
		Self { rx }
	}

	/// Resolves once a stop is signaled; pends forever if the handle was
	/// dropped without signaling
	pub async fn cancelled(&mut self) {
		loop {
			if *self.rx.borrow() {
				return;
			}
			if self.rx.changed().await.is_err() {
				std::future::pending::<()>().await;
			}
		}
	}
}

/// Create a linked stop handle/token pair
pub fn stop_channel() -> (StopHandle, StopToken) {
	let (tx, rx) = watch::channel(false);
	(StopHandle { tx }, StopToken { rx })
}

/// Polls transaction status until terminal, cancelled, or exhausted
#[derive(Clone)]
pub struct ConfirmationTracker {
	source: Arc<dyn StatusSource>,
	config: TrackerConfig,
}

impl ConfirmationTracker {
	pub fn new(source: Arc<dyn StatusSource>, config: TrackerConfig) -> Self {
		Self { source, config }
	}

	pub fn config(&self) -> &TrackerConfig {
		&self.config
	}

	/// Wait for a transaction to reach a terminal state.
	///
	/// Terminal `confirmed`/`failed` stops polling immediately. Transport
	/// errors map to `unknown` and polling continues. Exhausting the
	/// attempt budget yields `unknown` with a timeout explanation, which
	/// is distinct from a confirmed failure; callers must not conflate
	/// the two.
	pub async fn wait_for_confirmation(
		&self,
		tx_id: &str,
		mut stop: StopToken,
	) -> TransactionStatus {
		for attempt in 0..self.config.max_attempts {
			if attempt > 0 {
				tokio::select! {
					_ = sleep(self.config.interval) => {},
					_ = stop.cancelled() => {
						debug!(tx_id, attempt, "confirmation tracking cancelled");
						return TransactionStatus::unknown("Transaction tracking cancelled");
					},
				}
			}

			let status = match self.source.transaction_status(tx_id).await {
				Ok(status) => status,
				Err(e) => TransactionStatus::unknown(e.to_string()),
			};

			if status.is_terminal() {
				debug!(tx_id, attempt, status = ?status.status, "transaction reached terminal state");
				return status;
			}
		}

		TransactionStatus::unknown("Timeout waiting for confirmation")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use crossway_types::{BridgeResult, TxStatus};
	use std::sync::atomic::{AtomicU32, Ordering};
	use tokio::time::Instant;

	/// Source whose status sequence is scripted per call
	struct ScriptedSource {
		calls: AtomicU32,
		script: Vec<TransactionStatus>,
	}

	impl ScriptedSource {
		fn always_pending() -> Self {
			Self {
				calls: AtomicU32::new(0),
				script: Vec::new(),
			}
		}

		fn confirming_after(pending_polls: usize) -> Self {
			let mut script = vec![TransactionStatus::pending(); pending_polls];
			script.push(TransactionStatus {
				status: TxStatus::Confirmed,
				block_height: Some(100),
				..TransactionStatus::pending()
			});
			Self {
				calls: AtomicU32::new(0),
				script,
			}
		}

		fn call_count(&self) -> u32 {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl StatusSource for ScriptedSource {
		async fn transaction_status(&self, _tx_id: &str) -> BridgeResult<TransactionStatus> {
			let call = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
			Ok(self
				.script
				.get(call)
				.cloned()
				.unwrap_or_else(TransactionStatus::pending))
		}
	}

	fn tracker(source: Arc<ScriptedSource>) -> ConfirmationTracker {
		ConfirmationTracker::new(source, TrackerConfig::default())
	}

	#[tokio::test(start_paused = true)]
	async fn test_exhausted_budget_reports_unknown_timeout() {
		let source = Arc::new(ScriptedSource::always_pending());
		let started = Instant::now();

		let status = tracker(Arc::clone(&source))
			.wait_for_confirmation("at1abc", StopToken::never())
			.await;

		assert_eq!(status.status, TxStatus::Unknown);
		assert!(status.error.as_deref().unwrap().contains("Timeout"));
		assert_eq!(source.call_count(), 30);
		// 30 polls at 10s spacing: 29 sleeps between attempts
		assert_eq!(started.elapsed(), Duration::from_secs(290));
	}

	#[tokio::test(start_paused = true)]
	async fn test_terminal_state_stops_polling_immediately() {
		let source = Arc::new(ScriptedSource::confirming_after(2));

		let status = tracker(Arc::clone(&source))
			.wait_for_confirmation("at1abc", StopToken::never())
			.await;

		assert_eq!(status.status, TxStatus::Confirmed);
		assert_eq!(status.block_height, Some(100));
		assert_eq!(source.call_count(), 3);
	}

	#[tokio::test(start_paused = true)]
	async fn test_stop_handle_cancels_between_polls() {
		let source = Arc::new(ScriptedSource::always_pending());
		let (handle, token) = stop_channel();

		let task = {
			let tracker = tracker(Arc::clone(&source));
			tokio::spawn(async move { tracker.wait_for_confirmation("at1abc", token).await })
		};

		// Let the first poll happen, then cancel mid-sleep
		tokio::time::sleep(Duration::from_secs(1)).await;
		handle.stop();

		let status = task.await.unwrap();
		assert_eq!(status.status, TxStatus::Unknown);
		assert!(status.error.as_deref().unwrap().contains("cancelled"));
		assert_eq!(source.call_count(), 1);
	}

	#[tokio::test(start_paused = true)]
	async fn test_timeout_is_distinct_from_failed() {
		let mut script = vec![TransactionStatus::pending(); 5];
		script.push(TransactionStatus {
			status: TxStatus::Failed,
			..TransactionStatus::pending()
		});
		let source = Arc::new(ScriptedSource {
			calls: AtomicU32::new(0),
			script,
		});

		let status = tracker(Arc::clone(&source))
			.wait_for_confirmation("at1abc", StopToken::never())
			.await;

		assert_eq!(status.status, TxStatus::Failed);
		assert_eq!(source.call_count(), 6);
	}
}
