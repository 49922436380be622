//! Shared chain and token models

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod units;

/// Chain identifier.
///
/// EVM networks are identified by their numeric chain id; non-EVM networks
/// (Solana, Aleo) use a lowercase key string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(untagged)]
pub enum ChainId {
	Numeric(u64),
	Key(String),
}

impl ChainId {
	/// Return the key string for non-numeric chains
	pub fn as_key(&self) -> Option<&str> {
		match self {
			ChainId::Key(key) => Some(key),
			ChainId::Numeric(_) => None,
		}
	}

	/// Case-insensitive comparison against a chain key
	pub fn is_key(&self, key: &str) -> bool {
		matches!(self, ChainId::Key(k) if k.eq_ignore_ascii_case(key))
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChainId::Numeric(id) => write!(f, "{}", id),
			ChainId::Key(key) => write!(f, "{}", key),
		}
	}
}

impl From<u64> for ChainId {
	fn from(id: u64) -> Self {
		ChainId::Numeric(id)
	}
}

impl From<&str> for ChainId {
	fn from(key: &str) -> Self {
		ChainId::Key(key.to_string())
	}
}

/// A token on a specific chain
///
/// Identity is `(chain_id, address)`; the remaining fields are display
/// metadata refreshed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Token symbol (e.g., "ETH", "USDC")
	pub symbol: String,
	/// Human-readable name
	pub name: String,
	/// Logo URI
	#[serde(default)]
	pub icon: String,
	/// Chain the token lives on
	pub chain_id: ChainId,
	/// Contract address (native tokens use the zero address)
	pub address: String,
	/// Number of decimal places
	pub decimals: u8,
	/// Wallet balance in human-decimal units, when known
	#[serde(skip_serializing_if = "Option::is_none")]
	pub balance: Option<String>,
	/// USD price per unit, when known
	#[serde(skip_serializing_if = "Option::is_none")]
	pub usd_value: Option<String>,
}

impl Token {
	pub fn new(
		symbol: impl Into<String>,
		name: impl Into<String>,
		chain_id: impl Into<ChainId>,
		address: impl Into<String>,
		decimals: u8,
	) -> Self {
		Self {
			symbol: symbol.into(),
			name: name.into(),
			icon: String::new(),
			chain_id: chain_id.into(),
			address: address.into(),
			decimals,
			balance: None,
			usd_value: None,
		}
	}

	/// The identity pair under which tokens are deduplicated
	pub fn identity(&self) -> (&ChainId, &str) {
		(&self.chain_id, &self.address)
	}
}

/// Static chain reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Chain {
	pub id: ChainId,
	pub name: String,
	#[serde(default)]
	pub icon: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_id_serde_shapes() {
		let numeric: ChainId = serde_json::from_str("137").unwrap();
		assert_eq!(numeric, ChainId::Numeric(137));

		let key: ChainId = serde_json::from_str("\"aleo\"").unwrap();
		assert_eq!(key, ChainId::Key("aleo".to_string()));

		assert_eq!(serde_json::to_string(&numeric).unwrap(), "137");
		assert_eq!(serde_json::to_string(&key).unwrap(), "\"aleo\"");
	}

	#[test]
	fn test_chain_id_key_matching() {
		assert!(ChainId::from("Aleo").is_key("aleo"));
		assert!(!ChainId::Numeric(1).is_key("aleo"));
	}

	#[test]
	fn test_token_identity() {
		let mut usdc = Token::new("USDC", "USD Coin", 1u64, "0xa0b8", 6);
		let same = usdc.clone();
		usdc.balance = Some("12.5".to_string());

		// Balance changes do not change identity
		assert_eq!(usdc.identity(), same.identity());
	}

	#[test]
	fn test_token_wire_casing() {
		let token = Token::new("ETH", "Ethereum", 1u64, "0x0", 18);
		let json = serde_json::to_value(&token).unwrap();
		assert!(json.get("chainId").is_some());
		assert!(json.get("balance").is_none());
	}
}
