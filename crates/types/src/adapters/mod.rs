//! Upstream adapter models, traits, and errors

pub mod errors;
pub mod models;
pub mod traits;

pub use errors::{AdapterError, AdapterResult};
pub use models::{
	GasCostEntry, RawChain, RawQuoteRequest, RawRoute, RawRoutesRequest, RawStep, RawToken,
	StepAction, StepEstimate, ToolDetails, CLASSIFICATION_CHEAPEST, CLASSIFICATION_FASTEST,
};
pub use traits::RouteProvider;
