//! Per-session swap settings

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Route ordering preference shown in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RoutePriority {
	#[default]
	Best,
	Fastest,
	Cheapest,
}

/// Gas price preset for EVM execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum GasPricePreset {
	#[default]
	Normal,
	Fast,
	Instant,
}

/// Slippage tolerance: the literal string `"auto"` or a numeric fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(untagged)]
pub enum Slippage {
	Preset(SlippagePreset),
	Fraction(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SlippagePreset {
	Auto,
}

impl Default for Slippage {
	fn default() -> Self {
		Slippage::Preset(SlippagePreset::Auto)
	}
}

/// User-tunable swap settings, created with defaults at session start and
/// mutated only through explicit settings actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SwapSettings {
	pub route_priority: RoutePriority,
	pub gas_price: GasPricePreset,
	pub slippage: Slippage,
	pub enabled_bridges: Vec<String>,
	pub enabled_exchanges: Vec<String>,
}

/// Bridges known to the aggregator, all enabled by default
pub const KNOWN_BRIDGES: &[&str] = &[
	"across", "stargate", "hop", "cbridge", "connext", "verulink",
];

/// Exchanges known to the aggregator, all enabled by default
pub const KNOWN_EXCHANGES: &[&str] = &[
	"uniswap", "sushiswap", "pancakeswap", "quickswap", "1inch",
];

impl Default for SwapSettings {
	fn default() -> Self {
		Self {
			route_priority: RoutePriority::default(),
			gas_price: GasPricePreset::default(),
			slippage: Slippage::default(),
			enabled_bridges: KNOWN_BRIDGES.iter().map(|s| s.to_string()).collect(),
			enabled_exchanges: KNOWN_EXCHANGES.iter().map(|s| s.to_string()).collect(),
		}
	}
}
