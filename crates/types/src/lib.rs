//! Crossway Types
//!
//! Shared models and traits for the Crossway route aggregator.
//! This crate contains all domain models organized by business entity.

pub mod adapters;
pub mod bridge;
pub mod models;
pub mod quotes;
pub mod routes;
pub mod settings;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{
	units::{from_base_units, to_base_units},
	Chain, ChainId, Token,
};

pub use routes::{RouteTag, StepKind, SwapRoute, SwapStep};

pub use quotes::{
	QuoteError, QuoteResult, QuoteValidationError, QuoteValidationResult, RouteRequest,
	RoutesOutcome, RoutesResponse,
};

pub use adapters::{
	AdapterError, AdapterResult, GasCostEntry, RawChain, RawQuoteRequest, RawRoute,
	RawRoutesRequest, RawStep, RawToken, RouteProvider, StepAction, StepEstimate, ToolDetails,
};

pub use bridge::{
	BridgeError, BridgeFees, BridgeQuote, BridgeQuoteRequest, BridgeResult, BridgeRoute,
	BridgeStep, Merchant, MerchantRegistry, RateOracle, RelayerJob, RelayerRequest, StatusSource,
	TrackedTransaction, TransactionStatus, TransactionStatusRequest, Transition,
	TransitionRequest, TxStatus,
};

pub use settings::{GasPricePreset, RoutePriority, Slippage, SlippagePreset, SwapSettings};
