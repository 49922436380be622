use axum::{
	extract::{Query, State},
	response::Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::common::{quote_error, ApiError};
use crate::state::AppState;
use crossway_types::{Chain, ChainId, Token};

fn parse_chain_id(raw: &str) -> ChainId {
	match raw.parse::<u64>() {
		Ok(id) => ChainId::Numeric(id),
		Err(_) => ChainId::Key(raw.to_string()),
	}
}

#[derive(Debug, Serialize)]
pub struct ChainsResponse {
	pub chains: Vec<Chain>,
}

/// GET /api/v1/chains - Supported chains
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/chains",
    responses((status = 200, description = "Supported chains")),
    tag = "reference"
))]
pub async fn get_chains(State(state): State<AppState>) -> Result<Json<ChainsResponse>, ApiError> {
	let chains = state.quote_service.chains().await.map_err(quote_error)?;
	Ok(Json(ChainsResponse { chains }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensQuery {
	pub chain_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokensResponse {
	pub tokens: Vec<Token>,
}

/// GET /api/v1/tokens - Known tokens, optionally for one chain
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/tokens",
    responses((status = 200, description = "Known tokens")),
    tag = "reference"
))]
pub async fn get_tokens(
	State(state): State<AppState>,
	Query(query): Query<TokensQuery>,
) -> Result<Json<TokensResponse>, ApiError> {
	let chain_id = query.chain_id.as_deref().map(parse_chain_id);
	let tokens = state
		.quote_service
		.tokens(chain_id.as_ref())
		.await
		.map_err(quote_error)?;
	Ok(Json(TokensResponse { tokens }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsQuery {
	pub from_chain: Option<String>,
	pub to_chain: Option<String>,
}

/// GET /api/v1/connections - Token-pair connections between chains
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/connections",
    responses((status = 200, description = "Available connections")),
    tag = "reference"
))]
pub async fn get_connections(
	State(state): State<AppState>,
	Query(query): Query<ConnectionsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
	let from_chain = query.from_chain.as_deref().map(parse_chain_id);
	let to_chain = query.to_chain.as_deref().map(parse_chain_id);

	let connections = state
		.quote_service
		.connections(from_chain.as_ref(), to_chain.as_ref())
		.await
		.map_err(quote_error)?;
	Ok(Json(connections))
}
