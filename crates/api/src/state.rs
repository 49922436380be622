use std::sync::Arc;

use crossway_service::{BridgeService, ConfirmationTracker, QuoteService};
use crossway_storage::Storage;
use crossway_types::StatusSource;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub quote_service: Arc<QuoteService>,
	pub bridge_service: Arc<BridgeService>,
	pub tracker: Arc<ConfirmationTracker>,
	pub status_source: Arc<dyn StatusSource>,
	pub storage: Arc<dyn Storage>,
}
