//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub upstream: UpstreamSettings,
	pub bridge: BridgeSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Upstream routing API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
	/// Base URL of the routing API
	pub endpoint: String,
	/// Request timeout for HTTP calls
	pub request_timeout_ms: u64,
	/// Slippage fraction applied when a request does not carry one
	pub default_slippage: f64,
	/// Quiet period applied to amount-input driven quote refreshes
	pub debounce_ms: u64,
}

impl Default for UpstreamSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://li.quest/v1".to_string(),
			request_timeout_ms: 30_000,
			default_slippage: 0.03,
			debounce_ms: 500,
		}
	}
}

/// Privacy-chain bridge configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BridgeSettings {
	/// Chain key identifying the privacy chain in requests
	pub chain_key: String,
	/// Explorer API used for transaction status lookups
	pub explorer_endpoint: String,
	/// Network name segment of the explorer path
	pub network: String,
	/// Program handling in-chain swaps
	pub router_program: String,
	/// Program handling bridge transfers
	pub bridge_program: String,
	/// Treasury address collecting the platform fee
	pub treasury_address: String,
	/// Confirmation poll interval in seconds
	pub poll_interval_secs: u64,
	/// Maximum confirmation poll attempts before reporting unknown
	pub max_poll_attempts: u32,
}

impl Default for BridgeSettings {
	fn default() -> Self {
		Self {
			chain_key: "aleo".to_string(),
			explorer_endpoint: "https://api.explorer.provable.com/v1".to_string(),
			network: "testnet".to_string(),
			router_program: "crossway_router.aleo".to_string(),
			bridge_program: "crossway_bridge.aleo".to_string(),
			treasury_address:
				"aleo1crosswaytreasury000000000000000000000000000000000000000000".to_string(),
			poll_interval_secs: 10,
			max_poll_attempts: 30,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_complete() {
		let settings = Settings::default();
		assert_eq!(settings.server.port, 8080);
		assert_eq!(settings.upstream.endpoint, "https://li.quest/v1");
		assert_eq!(settings.bridge.chain_key, "aleo");
		assert_eq!(settings.bridge.poll_interval_secs, 10);
		assert_eq!(settings.bridge.max_poll_attempts, 30);
	}

	#[test]
	fn test_partial_config_fills_defaults() {
		let settings: Settings = serde_json::from_value(serde_json::json!({
			"server": {"port": 9090}
		}))
		.unwrap();
		assert_eq!(settings.server.port, 9090);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert_eq!(settings.upstream.default_slippage, 0.03);
	}
}
