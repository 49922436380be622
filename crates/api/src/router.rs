use axum::{
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	get_chains, get_connections, get_merchants, get_settings, get_tokens, health, post_bridge_quote,
	post_bridge_relayer, post_bridge_transaction, post_quote, post_routes, put_settings, ready,
};
use crate::state::AppState;
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router() -> Router<AppState> {
	// The wallet front-ends call from browser origins; CORS stays open and
	// the layer answers OPTIONS preflights
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let base_router = Router::new()
		.route("/health", get(health))
		.route("/ready", get(ready))
		.route("/api/v1/routes", post(post_routes))
		.route("/api/v1/quote", post(post_quote))
		.route("/api/v1/chains", get(get_chains))
		.route("/api/v1/tokens", get(get_tokens))
		.route("/api/v1/connections", get(get_connections))
		.route("/api/v1/bridge/quote", post(post_bridge_quote))
		.route("/api/v1/bridge/transaction", post(post_bridge_transaction))
		.route("/api/v1/bridge/relayer", post(post_bridge_relayer))
		.route("/api/v1/bridge/merchants", get(get_merchants))
		.route(
			"/api/v1/sessions/{id}/settings",
			get(get_settings).put(put_settings),
		);

	#[cfg(feature = "openapi")]
	let router = base_router
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

	#[cfg(not(feature = "openapi"))]
	let router = base_router;

	router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit)
}
