//! Crossway Service
//!
//! Core logic for route normalization, tagging, quoting, the privacy-chain
//! fee policy, and transaction confirmation tracking.

pub mod bridge;
pub mod fees;
pub mod normalizer;
pub mod oracle;
pub mod quotes;
pub mod tagger;
pub mod tracker;

pub use bridge::{BridgeConfig, BridgeService};
pub use normalizer::{format_duration, normalize_routes, percentage_diff};
pub use oracle::{StaticMerchantDirectory, StaticRateTable};
pub use quotes::{Debouncer, QuoteService};
pub use tagger::tag_routes;
pub use tracker::{stop_channel, ConfirmationTracker, StopHandle, StopToken, TrackerConfig};
