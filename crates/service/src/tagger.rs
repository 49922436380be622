//! Route tagging
//!
//! Ranking is entirely the upstream's RECOMMENDED order; nothing here
//! re-sorts. Tags are presentation labels layered onto that order.

use crossway_types::{
	RawRoute, RouteTag, SwapRoute, CLASSIFICATION_CHEAPEST, CLASSIFICATION_FASTEST,
};

/// Assign display tags to an already-ordered route list
///
/// The first route always receives Best Return; FASTEST and CHEAPEST
/// upstream classifications add their tags wherever they appear. Routes
/// with nothing applicable keep `tags = None`; consumers distinguish
/// absent from empty.
pub fn tag_routes(routes: &mut [SwapRoute], raws: &[RawRoute]) {
	for (index, (route, raw)) in routes.iter_mut().zip(raws.iter()).enumerate() {
		let mut tags = Vec::new();
		if index == 0 {
			tags.push(RouteTag::BestReturn);
		}
		if raw.has_classification(CLASSIFICATION_FASTEST) {
			tags.push(RouteTag::Fastest);
		}
		if raw.has_classification(CLASSIFICATION_CHEAPEST) {
			tags.push(RouteTag::Cheapest);
		}

		route.tags = if tags.is_empty() { None } else { Some(tags) };
	}
}
