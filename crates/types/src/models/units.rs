//! Token amount conversion between human-decimal and base units
//!
//! Amounts travel through the system as strings to preserve precision;
//! these helpers are the only place a decimal point is added or removed.

/// Fractional digits kept when rendering a base-unit amount for display.
/// Display strings must never feed back into fee or amount arithmetic.
const DISPLAY_FRACTION_DIGITS: usize = 6;

/// Convert a human-decimal amount to an integer base-unit string.
///
/// The fractional part is right-padded or truncated to exactly `decimals`
/// digits; no rounding is performed. Malformed input converts to `"0"`,
/// which callers treat as "no quote needed yet" rather than an error.
pub fn to_base_units(amount: &str, decimals: u8) -> String {
	let amount = amount.trim();
	let mut parts = amount.splitn(2, '.');
	let whole = parts.next().unwrap_or_default();
	let fraction = parts.next().unwrap_or_default();

	let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
	if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
		return "0".to_string();
	}

	let mut fraction: String = fraction.chars().take(decimals as usize).collect();
	while fraction.len() < decimals as usize {
		fraction.push('0');
	}

	let concatenated = format!("{}{}", whole, fraction);
	let significant = concatenated.trim_start_matches('0');
	if significant.is_empty() {
		"0".to_string()
	} else {
		significant.to_string()
	}
}

/// Render an integer base-unit string as a human-decimal display amount.
///
/// The fractional display is truncated to six digits regardless of the
/// token's true precision, so this is lossy for high-decimal tokens.
pub fn from_base_units(amount: &str, decimals: u8) -> String {
	if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
		return "0".to_string();
	}
	if decimals == 0 {
		let significant = amount.trim_start_matches('0');
		return if significant.is_empty() {
			"0".to_string()
		} else {
			significant.to_string()
		};
	}

	let width = decimals as usize + 1;
	let padded = if amount.len() < width {
		format!("{}{}", "0".repeat(width - amount.len()), amount)
	} else {
		amount.to_string()
	};

	let split = padded.len() - decimals as usize;
	let (whole, fraction) = padded.split_at(split);
	let display: String = fraction.chars().take(DISPLAY_FRACTION_DIGITS).collect();
	format!("{}.{}", whole, display)
}
