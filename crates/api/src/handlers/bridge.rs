use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::handlers::common::{bridge_error, ApiError};
use crate::state::AppState;
use crossway_service::StopToken;
use crossway_storage::Storage;
use crossway_types::{
	BridgeError, BridgeQuote, BridgeQuoteRequest, Merchant, RelayerJob, RelayerRequest,
	StatusSource, TrackedTransaction, TransactionStatus, TransactionStatusRequest,
};

/// POST /api/v1/bridge/quote - Quote a transfer touching the privacy chain
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/bridge/quote",
    request_body = BridgeQuoteRequest,
    responses(
        (status = 200, description = "Bridge quote with fee breakdown", body = BridgeQuote),
        (status = 400, description = "Neither side is the privacy chain", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "bridge"
))]
pub async fn post_bridge_quote(
	State(state): State<AppState>,
	Json(request): Json<BridgeQuoteRequest>,
) -> Result<Json<BridgeQuote>, ApiError> {
	info!(
		from = %request.from_chain,
		to = %request.to_chain,
		amount = %request.amount,
		"received bridge quote request"
	);

	let quote = state
		.bridge_service
		.quote(&request)
		.await
		.map_err(bridge_error)?;
	Ok(Json(quote))
}

/// POST /api/v1/bridge/transaction - Transaction status lookup
///
/// The only supported action is `status`; the last observed snapshot is
/// recorded so later lookups can compare progress.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/bridge/transaction",
    request_body = TransactionStatusRequest,
    responses(
        (status = 200, description = "Transaction status snapshot", body = TransactionStatus),
        (status = 400, description = "Unknown action", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "bridge"
))]
pub async fn post_bridge_transaction(
	State(state): State<AppState>,
	Json(request): Json<TransactionStatusRequest>,
) -> Result<Json<TransactionStatus>, ApiError> {
	if request.action != "status" {
		return Err(bridge_error(BridgeError::InvalidAction {
			action: request.action,
		}));
	}

	let status = state
		.status_source
		.transaction_status(&request.tx_id)
		.await
		.map_err(bridge_error)?;

	if let Err(e) = state
		.storage
		.record_transaction(TrackedTransaction::new(&request.tx_id, status.clone()))
		.await
	{
		warn!(tx_id = %request.tx_id, error = %e, "failed to record transaction snapshot");
	}

	Ok(Json(status))
}

/// POST /api/v1/bridge/relayer - Queue a destination-chain claim
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/bridge/relayer",
    request_body = RelayerRequest,
    responses((status = 200, description = "Queued relayer job", body = RelayerJob)),
    tag = "bridge"
))]
pub async fn post_bridge_relayer(
	State(state): State<AppState>,
	Json(request): Json<RelayerRequest>,
) -> Json<RelayerJob> {
	let job = state.bridge_service.relay(&request);

	// Watch the source transaction in the background so the claim can be
	// correlated with its confirmation later; the final snapshot lands in
	// storage either way.
	let tracker = Arc::clone(&state.tracker);
	let storage = Arc::clone(&state.storage);
	let tx_id = request.aleo_tx_id.clone();
	tokio::spawn(async move {
		let status = tracker
			.wait_for_confirmation(&tx_id, StopToken::never())
			.await;
		if let Err(e) = storage
			.record_transaction(TrackedTransaction::new(&tx_id, status))
			.await
		{
			warn!(%tx_id, error = %e, "failed to record tracked confirmation");
		}
	});

	Json(job)
}

#[derive(Debug, Serialize)]
pub struct MerchantsResponse {
	pub merchants: Vec<Merchant>,
}

/// GET /api/v1/bridge/merchants - Registered liquidity providers
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/bridge/merchants",
    responses((status = 200, description = "Registered merchants")),
    tag = "bridge"
))]
pub async fn get_merchants(
	State(state): State<AppState>,
) -> Result<Json<MerchantsResponse>, ApiError> {
	let merchants = state
		.bridge_service
		.merchants()
		.await
		.map_err(bridge_error)?;
	Ok(Json(MerchantsResponse { merchants }))
}
