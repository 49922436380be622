//! Privacy-chain fee policy
//!
//! Fixed-point amount conversion, the platform-fee constant, and the
//! transaction payloads submitted through the privacy-chain wallet. The
//! fee is carried as a transition input for the program to collect; it is
//! never pre-deducted from the displayed amount.

use crossway_types::{BridgeError, BridgeResult, Transition, TransitionRequest};

/// Platform fee in basis points (50 = 0.50%)
pub const PLATFORM_FEE_BPS: u64 = 50;

/// Microunits per whole token (6-decimal fixed point)
pub const MICROUNITS_PER_TOKEN: f64 = 1_000_000.0;

/// Flat network-gas reservation for an in-chain swap, in microunits
pub const SWAP_GAS_FEE_MICROUNITS: u64 = 100_000;

/// Flat network-gas reservation for a bridge transfer, in microunits;
/// bridge transitions do more work and reserve more
pub const BRIDGE_GAS_FEE_MICROUNITS: u64 = 150_000;

/// Characters of the destination address folded into the bridge memo
const MEMO_ADDRESS_CHARS: usize = 32;

/// Parameters for a router swap transaction
#[derive(Debug, Clone)]
pub struct SwapCallParams {
	/// Human-decimal amount
	pub amount: String,
	pub merchant_address: String,
	/// Overrides the configured router program when set
	pub program_id: Option<String>,
}

/// Parameters for a bridge transaction
#[derive(Debug, Clone)]
pub struct BridgeCallParams {
	/// Human-decimal amount
	pub amount: String,
	pub destination_chain: String,
	pub destination_address: String,
	pub bridge_provider: String,
}

/// Convert a human-decimal amount to 6-decimal fixed point, truncating
/// toward zero
pub fn to_microunits(amount: &str) -> BridgeResult<u64> {
	let parsed: f64 = amount
		.trim()
		.parse()
		.map_err(|_| BridgeError::InvalidAmount {
			amount: amount.to_string(),
			reason: "not a decimal number".to_string(),
		})?;

	if !parsed.is_finite() || parsed < 0.0 {
		return Err(BridgeError::InvalidAmount {
			amount: amount.to_string(),
			reason: "must be a non-negative finite amount".to_string(),
		});
	}

	Ok((parsed * MICROUNITS_PER_TOKEN).floor() as u64)
}

/// Fold a string into a numeric field element.
///
/// Polynomial rolling hash (h = h * 31 + code unit) over UTF-16 code
/// units, wrapped to the 32-bit signed range, absolute value. Lossy and
/// collision-prone, but the deployed program interface expects exactly
/// this encoding, including the wraparound and sign handling.
pub fn hash_field(input: &str) -> u32 {
	let mut hash: i32 = 0;
	for unit in input.encode_utf16() {
		hash = hash
			.wrapping_shl(5)
			.wrapping_sub(hash)
			.wrapping_add(unit as i32);
	}
	hash.unsigned_abs()
}

/// Build the wallet payload for a router swap
pub fn swap_transition(
	params: &SwapCallParams,
	default_program: &str,
) -> BridgeResult<TransitionRequest> {
	let microunits = to_microunits(&params.amount)?;

	Ok(TransitionRequest {
		transitions: vec![Transition {
			program: params
				.program_id
				.clone()
				.unwrap_or_else(|| default_program.to_string()),
			function_name: "swap_with_fee".to_string(),
			inputs: vec![
				format!("{}u64", microunits),
				params.merchant_address.clone(),
				format!("{}u64", PLATFORM_FEE_BPS),
			],
		}],
		fee: SWAP_GAS_FEE_MICROUNITS,
		fee_private: false,
	})
}

/// Build the wallet payload for a bridge transfer
///
/// Destination chain and address travel as hashed field elements; the
/// address is folded over its first 32 characters only.
pub fn bridge_transition(
	params: &BridgeCallParams,
	bridge_program: &str,
) -> BridgeResult<TransitionRequest> {
	let microunits = to_microunits(&params.amount)?;
	let address_prefix: String = params
		.destination_address
		.chars()
		.take(MEMO_ADDRESS_CHARS)
		.collect();

	Ok(TransitionRequest {
		transitions: vec![Transition {
			program: bridge_program.to_string(),
			function_name: "bridge_with_fee".to_string(),
			inputs: vec![
				format!("{}u64", microunits),
				format!("{}u64", PLATFORM_FEE_BPS),
				format!("{}field", hash_field(&params.destination_chain)),
				format!("{}field", hash_field(&address_prefix)),
			],
		}],
		fee: BRIDGE_GAS_FEE_MICROUNITS,
		fee_private: false,
	})
}
