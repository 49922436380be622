//! Crossway Aggregator Library
//!
//! A cross-chain swap/bridge route aggregation service: it consumes an
//! upstream routing API, normalizes and tags candidate routes, prices the
//! privacy-chain bridge path, and tracks transaction confirmation.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

// Core domain types - the most commonly used types
pub use crossway_types::{
	AdapterError,
	BridgeError,
	BridgeQuote,
	BridgeQuoteRequest,
	Chain,
	ChainId,
	Merchant,
	// Trait seams swapped at the builder
	MerchantRegistry,
	// Error types
	QuoteError,
	RateOracle,
	RelayerJob,
	RelayerRequest,
	RouteProvider,
	RouteRequest,
	RouteTag,
	RoutesOutcome,
	StatusSource,
	// Primary domain entities
	SwapRoute,
	SwapSettings,
	SwapStep,
	Token,
	TransactionStatus,
	TxStatus,
};

// Service layer
pub use crossway_service::{
	BridgeConfig, BridgeService, ConfirmationTracker, Debouncer, QuoteService,
	StaticMerchantDirectory, StaticRateTable, StopHandle, StopToken, TrackerConfig,
};

// Adapters, storage, configuration, API surface
pub use crossway_adapters::{AleoExplorerClient, LifiClient};
pub use crossway_api::{create_router, AppState};
pub use crossway_config::{load_config, LogFormat, LoggingSettings, Settings};
pub use crossway_storage::{MemoryStore, Storage, StorageError};

/// Errors raised while assembling the server
#[derive(Error, Debug)]
pub enum BuilderError {
	#[error("Configuration error: {0}")]
	Config(#[from] crossway_config::ConfigError),

	#[error("Adapter setup failed: {0}")]
	Adapter(#[from] AdapterError),
}

/// Assembles the aggregator: settings, adapters, services, router.
///
/// Every collaborator can be swapped before `build`, which is how tests
/// inject mock providers and how deployments replace the demo oracle.
#[derive(Default)]
pub struct AggregatorBuilder {
	settings: Option<Settings>,
	route_provider: Option<Arc<dyn RouteProvider>>,
	status_source: Option<Arc<dyn StatusSource>>,
	rate_oracle: Option<Arc<dyn RateOracle>>,
	merchant_registry: Option<Arc<dyn MerchantRegistry>>,
	storage: Option<Arc<dyn Storage>>,
}

impl AggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn with_route_provider(mut self, provider: Arc<dyn RouteProvider>) -> Self {
		self.route_provider = Some(provider);
		self
	}

	pub fn with_status_source(mut self, source: Arc<dyn StatusSource>) -> Self {
		self.status_source = Some(source);
		self
	}

	pub fn with_rate_oracle(mut self, oracle: Arc<dyn RateOracle>) -> Self {
		self.rate_oracle = Some(oracle);
		self
	}

	pub fn with_merchant_registry(mut self, registry: Arc<dyn MerchantRegistry>) -> Self {
		self.merchant_registry = Some(registry);
		self
	}

	pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Build the router and the settings it was assembled from
	pub fn build(self) -> Result<(axum::Router, Settings), BuilderError> {
		let settings = match self.settings {
			Some(settings) => settings,
			None => load_config()?,
		};

		let route_provider: Arc<dyn RouteProvider> = match self.route_provider {
			Some(provider) => provider,
			None => Arc::new(LifiClient::new(
				&settings.upstream.endpoint,
				settings.upstream.request_timeout_ms,
			)?),
		};

		let status_source: Arc<dyn StatusSource> = match self.status_source {
			Some(source) => source,
			None => Arc::new(AleoExplorerClient::new(
				&settings.bridge.explorer_endpoint,
				&settings.bridge.network,
				settings.upstream.request_timeout_ms,
			)?),
		};

		let rate_oracle = self
			.rate_oracle
			.unwrap_or_else(|| Arc::new(StaticRateTable));
		let merchant_registry = self
			.merchant_registry
			.unwrap_or_else(|| Arc::new(StaticMerchantDirectory));
		let storage = self
			.storage
			.unwrap_or_else(|| Arc::new(MemoryStore::new()));

		let quote_service = Arc::new(QuoteService::new(
			route_provider,
			settings.upstream.default_slippage,
		));
		let bridge_service = Arc::new(BridgeService::new(
			rate_oracle,
			merchant_registry,
			BridgeConfig {
				chain_key: settings.bridge.chain_key.clone(),
				router_program: settings.bridge.router_program.clone(),
				bridge_program: settings.bridge.bridge_program.clone(),
				treasury_address: settings.bridge.treasury_address.clone(),
			},
		));
		let tracker = Arc::new(ConfirmationTracker::new(
			Arc::clone(&status_source),
			TrackerConfig {
				interval: Duration::from_secs(settings.bridge.poll_interval_secs),
				max_attempts: settings.bridge.max_poll_attempts,
			},
		));

		let state = AppState {
			quote_service,
			bridge_service,
			tracker,
			status_source,
			storage,
		};

		Ok((create_router().with_state(state), settings))
	}

	/// Build and run the server until shutdown
	pub async fn start_server(self) -> Result<(), Box<dyn std::error::Error>> {
		let (router, settings) = self.build()?;
		init_tracing(&settings.logging);

		let addr = format!("{}:{}", settings.server.host, settings.server.port);
		let listener = tokio::net::TcpListener::bind(&addr).await?;
		info!(
			%addr,
			upstream = %settings.upstream.endpoint,
			"crossway aggregator listening"
		);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

fn init_tracing(logging: &LoggingSettings) {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	// A second init (e.g. in tests) keeps the first subscriber
	let _ = match logging.format {
		LogFormat::Json => builder.json().try_init(),
		LogFormat::Compact => builder.compact().try_init(),
		LogFormat::Pretty => builder.try_init(),
	};
}
