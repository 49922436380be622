use axum::{extract::State, response::Json};
use tracing::info;

use crate::handlers::common::{quote_error, ApiError};
use crate::state::AppState;
use crossway_types::{RouteRequest, RoutesOutcome, RoutesResponse};

/// POST /api/v1/routes - Fetch normalized, tagged candidate routes
///
/// A zero or empty amount returns an empty route list with 200: that is a
/// valid "nothing to quote yet" state, not an error.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/routes",
    request_body = RouteRequest,
    responses(
        (status = 200, description = "Candidate routes in recommended order", body = RoutesResponse),
        (status = 400, description = "Invalid request", body = crate::handlers::common::ErrorResponse),
        (status = 502, description = "Upstream error", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "routes"
))]
pub async fn post_routes(
	State(state): State<AppState>,
	Json(request): Json<RouteRequest>,
) -> Result<Json<RoutesResponse>, ApiError> {
	info!(
		from = %request.from_token.symbol,
		to = %request.to_token.symbol,
		amount = %request.from_amount,
		"received routes request"
	);

	let routes = match state
		.quote_service
		.get_routes(&request)
		.await
		.map_err(quote_error)?
	{
		RoutesOutcome::Routes(routes) => routes,
		// A newer request owns the display; stale callers get nothing to
		// render rather than stale routes
		RoutesOutcome::Superseded => Vec::new(),
	};

	Ok(Json(RoutesResponse { routes }))
}

/// POST /api/v1/quote - Single-quote fast path
///
/// The upstream quote payload passes through verbatim; it already carries
/// the transaction request the wallet needs.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/quote",
    request_body = RouteRequest,
    responses(
        (status = 200, description = "Executable quote"),
        (status = 400, description = "Invalid request", body = crate::handlers::common::ErrorResponse),
        (status = 502, description = "Upstream error", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "routes"
))]
pub async fn post_quote(
	State(state): State<AppState>,
	Json(request): Json<RouteRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
	let quote = state
		.quote_service
		.get_quote(&request)
		.await
		.map_err(quote_error)?;
	Ok(Json(quote))
}
