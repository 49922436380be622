//! Route normalization
//!
//! Maps raw upstream route descriptors into [`SwapRoute`] value objects.
//! The mapping is total and order-preserving: every raw route produces
//! exactly one normalized route, in the upstream's position.

use crossway_types::{
	from_base_units, RawRoute, RawStep, RouteRequest, StepKind, SwapRoute, SwapStep,
};

/// Raw step type marking a cross-chain leg
const STEP_TYPE_CROSS: &str = "cross";

/// Normalize a full route list, preserving upstream order
pub fn normalize_routes(raws: &[RawRoute], request: &RouteRequest) -> Vec<SwapRoute> {
	raws.iter()
		.enumerate()
		.map(|(index, raw)| normalize_route(raw, index, request))
		.collect()
}

fn normalize_route(raw: &RawRoute, index: usize, request: &RouteRequest) -> SwapRoute {
	let gas_cost_usd: f64 = raw
		.steps
		.iter()
		.flat_map(|step| step.estimate.gas_costs.iter().flatten())
		.map(|gc| parse_or_zero(gc.amount_usd.as_deref().unwrap_or_default()))
		.sum();

	let total_duration: f64 = raw
		.steps
		.iter()
		.map(|step| step.estimate.execution_duration)
		.sum();

	let steps: Vec<SwapStep> = raw.steps.iter().map(map_step).collect();

	let to_usd = parse_or_zero(&raw.to_amount_usd);
	let from_usd = parse_or_zero(&raw.from_amount_usd);

	SwapRoute {
		id: if raw.id.is_empty() {
			format!("route-{}", index)
		} else {
			raw.id.clone()
		},
		from_token: request.from_token.clone(),
		to_token: request.to_token.clone(),
		from_amount: request.from_amount.clone(),
		to_amount: from_base_units(&raw.to_amount, request.to_token.decimals),
		to_amount_usd: format!("{:.2}", to_usd),
		gas_cost: "0".to_string(),
		gas_cost_usd: format!("{:.2}", gas_cost_usd),
		estimated_time: format_duration(total_duration),
		steps,
		tags: None,
		percentage_diff: Some(percentage_diff(from_usd, to_usd)),
	}
}

fn map_step(step: &RawStep) -> SwapStep {
	SwapStep {
		kind: if step.step_type == STEP_TYPE_CROSS {
			StepKind::Bridge
		} else {
			StepKind::Swap
		},
		provider: step.tool_details.name.clone(),
		from_token: Some(step.action.from_token.symbol.clone()),
		to_token: Some(step.action.to_token.symbol.clone()),
		from_chain: Some(step.action.from_chain_id.to_string()),
		to_chain: Some(step.action.to_chain_id.to_string()),
		chain: None,
	}
}

/// Render a duration in seconds for display
pub fn format_duration(seconds: f64) -> String {
	if seconds < 60.0 {
		format!("{}s", seconds)
	} else if seconds < 3600.0 {
		format!("{} min", (seconds / 60.0).round())
	} else {
		format!("{}h", (seconds / 3600.0).round())
	}
}

/// Percentage difference between input and output USD value
///
/// Non-negative differences carry an explicit plus sign; a zero or missing
/// input value yields an unsigned "0.00%" rather than dividing by zero.
pub fn percentage_diff(from_usd: f64, to_usd: f64) -> String {
	if from_usd > 0.0 {
		let diff = (to_usd - from_usd) / from_usd * 100.0;
		if diff >= 0.0 {
			format!("+{:.2}%", diff)
		} else {
			format!("{:.2}%", diff)
		}
	} else {
		"0.00%".to_string()
	}
}

fn parse_or_zero(value: &str) -> f64 {
	value.parse().unwrap_or(0.0)
}
