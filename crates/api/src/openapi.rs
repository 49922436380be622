//! OpenAPI documentation (enabled with the `openapi` feature)

use utoipa::OpenApi;

use crate::handlers;
use crate::handlers::common::ErrorResponse;
use crossway_types::{
	BridgeFees, BridgeQuote, BridgeQuoteRequest, BridgeRoute, BridgeStep, Chain, ChainId,
	Merchant, RelayerJob, RelayerRequest, RouteRequest, RouteTag, RoutesResponse, StepKind,
	SwapRoute, SwapSettings, SwapStep, Token, TransactionStatus, TransactionStatusRequest,
	TxStatus,
};

#[derive(OpenApi)]
#[openapi(
	paths(
		handlers::health::health,
		handlers::health::ready,
		handlers::routes::post_routes,
		handlers::routes::post_quote,
		handlers::reference::get_chains,
		handlers::reference::get_tokens,
		handlers::reference::get_connections,
		handlers::bridge::post_bridge_quote,
		handlers::bridge::post_bridge_transaction,
		handlers::bridge::post_bridge_relayer,
		handlers::bridge::get_merchants,
		handlers::settings::get_settings,
		handlers::settings::put_settings,
	),
	components(schemas(
		Token,
		Chain,
		ChainId,
		RouteRequest,
		RoutesResponse,
		SwapRoute,
		SwapStep,
		StepKind,
		RouteTag,
		BridgeQuoteRequest,
		BridgeQuote,
		BridgeFees,
		BridgeRoute,
		BridgeStep,
		TransactionStatus,
		TransactionStatusRequest,
		TxStatus,
		RelayerRequest,
		RelayerJob,
		Merchant,
		SwapSettings,
		ErrorResponse,
	)),
	tags(
		(name = "routes", description = "Route aggregation"),
		(name = "reference", description = "Chains, tokens, and connections"),
		(name = "bridge", description = "Privacy-chain bridge"),
		(name = "settings", description = "Session settings"),
		(name = "health", description = "Health and readiness")
	),
	info(
		title = "Crossway Aggregator API",
		description = "Cross-chain swap/bridge route aggregation service",
		version = "0.1.0"
	)
)]
pub struct ApiDoc;
