//! Crossway Adapters
//!
//! HTTP clients for the external services the aggregator consumes: the
//! routing/aggregation API and the privacy-chain explorer.

pub mod aleo;
pub mod lifi;

pub use aleo::AleoExplorerClient;
pub use lifi::LifiClient;
pub use crossway_types::{AdapterError, AdapterResult, RouteProvider};
