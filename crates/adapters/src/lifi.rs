//! LI.FI routing API client
//!
//! Implements [`RouteProvider`] against the LI.FI REST API. The client only
//! transports and parses; route selection stays upstream and the returned
//! RECOMMENDED order is preserved untouched.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderValue},
	Client, Response,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crossway_types::{
	AdapterError, AdapterResult, ChainId, RawChain, RawQuoteRequest, RawRoute, RawRoutesRequest,
	RawToken, RouteProvider,
};

/// Envelope of the POST /advanced/routes response
#[derive(Debug, Deserialize)]
struct RoutesEnvelope {
	#[serde(default)]
	routes: Vec<RawRoute>,
}

/// Envelope of the GET /chains response
#[derive(Debug, Deserialize)]
struct ChainsEnvelope {
	#[serde(default)]
	chains: Vec<RawChain>,
}

/// Envelope of the GET /tokens response
#[derive(Debug, Deserialize)]
struct TokensEnvelope {
	#[serde(default)]
	tokens: HashMap<String, Vec<RawToken>>,
}

/// Error body shape the upstream uses on failures
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	error: Option<String>,
}

/// LI.FI API client
#[derive(Debug, Clone)]
pub struct LifiClient {
	client: Client,
	base_url: String,
}

impl LifiClient {
	/// Create a client against the given base URL
	pub fn new(base_url: impl Into<String>, request_timeout_ms: u64) -> AdapterResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert(
			"User-Agent",
			HeaderValue::from_static("Crossway-Aggregator/1.0"),
		);

		let client = Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(request_timeout_ms))
			.build()
			.map_err(AdapterError::HttpError)?;

		Ok(Self {
			client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
		})
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	/// Parse a response, surfacing the upstream's own error message on
	/// non-2xx statuses
	async fn parse<T: DeserializeOwned>(response: Response) -> AdapterResult<T> {
		let status = response.status();
		if !status.is_success() {
			let message = response
				.json::<UpstreamErrorBody>()
				.await
				.ok()
				.and_then(|body| body.message.or(body.error));
			return Err(AdapterError::from_status(status.as_u16(), message));
		}

		response
			.json::<T>()
			.await
			.map_err(|e| AdapterError::InvalidResponse {
				reason: format!("failed to parse upstream response: {}", e),
			})
	}
}

#[async_trait]
impl RouteProvider for LifiClient {
	async fn fetch_routes(&self, request: &RawRoutesRequest) -> AdapterResult<Vec<RawRoute>> {
		let url = self.url("/advanced/routes");
		debug!(
			from_chain = %request.from_chain_id,
			to_chain = %request.to_chain_id,
			amount = %request.from_amount,
			"fetching candidate routes"
		);

		let body = serde_json::json!({
			"fromChainId": request.from_chain_id,
			"toChainId": request.to_chain_id,
			"fromTokenAddress": request.from_token_address,
			"toTokenAddress": request.to_token_address,
			"fromAmount": request.from_amount,
			"fromAddress": request.from_address,
			"options": {
				"slippage": request.slippage,
				"order": request.order,
			},
		});

		let response = self
			.client
			.post(&url)
			.json(&body)
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		// Some upstream failures arrive as a 200 with an error field
		let value: serde_json::Value = Self::parse(response).await?;
		if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
			return Err(AdapterError::Upstream {
				message: message.to_string(),
			});
		}

		let envelope: RoutesEnvelope = serde_json::from_value(value)?;
		debug!(count = envelope.routes.len(), "received candidate routes");
		Ok(envelope.routes)
	}

	async fn fetch_quote(&self, request: &RawQuoteRequest) -> AdapterResult<serde_json::Value> {
		let url = self.url("/quote");
		let from_address = request.from_address.clone().unwrap_or_default();

		let response = self
			.client
			.get(&url)
			.query(&[
				("fromChain", request.from_chain.to_string()),
				("toChain", request.to_chain.to_string()),
				("fromToken", request.from_token.clone()),
				("toToken", request.to_token.clone()),
				("fromAmount", request.from_amount.clone()),
				("fromAddress", from_address),
				("slippage", request.slippage.to_string()),
			])
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		Self::parse(response).await
	}

	async fn fetch_chains(&self) -> AdapterResult<Vec<RawChain>> {
		let response = self
			.client
			.get(self.url("/chains"))
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		let envelope: ChainsEnvelope = Self::parse(response).await?;
		Ok(envelope.chains)
	}

	async fn fetch_tokens(
		&self,
		chain_id: Option<&ChainId>,
	) -> AdapterResult<HashMap<String, Vec<RawToken>>> {
		let mut request = self.client.get(self.url("/tokens"));
		if let Some(chain) = chain_id {
			request = request.query(&[("chains", chain.to_string())]);
		}

		let response = request.send().await.map_err(AdapterError::HttpError)?;
		let envelope: TokensEnvelope = Self::parse(response).await?;
		Ok(envelope.tokens)
	}

	async fn fetch_connections(
		&self,
		from_chain: Option<&ChainId>,
		to_chain: Option<&ChainId>,
	) -> AdapterResult<serde_json::Value> {
		let mut request = self.client.get(self.url("/connections"));
		if let Some(chain) = from_chain {
			request = request.query(&[("fromChain", chain.to_string())]);
		}
		if let Some(chain) = to_chain {
			request = request.query(&[("toChain", chain.to_string())]);
		}

		let response = request.send().await.map_err(AdapterError::HttpError)?;
		Self::parse(response).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_base_url_normalization() {
		let client = LifiClient::new("https://li.quest/v1/", 30_000).unwrap();
		assert_eq!(client.url("/chains"), "https://li.quest/v1/chains");
	}

	#[test]
	fn test_routes_envelope_tolerates_missing_routes() {
		let envelope: RoutesEnvelope = serde_json::from_str("{}").unwrap();
		assert!(envelope.routes.is_empty());
	}

	#[test]
	fn test_error_body_either_field() {
		let body: UpstreamErrorBody =
			serde_json::from_str("{\"message\": \"insufficient liquidity\"}").unwrap();
		assert_eq!(body.message.as_deref(), Some("insufficient liquidity"));

		let body: UpstreamErrorBody = serde_json::from_str("{\"error\": \"bad token\"}").unwrap();
		assert_eq!(body.error.as_deref(), Some("bad token"));
	}
}
