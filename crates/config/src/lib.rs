//! Crossway Config
//!
//! Settings structures and loading for the Crossway aggregator.

pub mod loader;
pub mod settings;

pub use config::ConfigError;
pub use loader::load_config;
pub use settings::{
	BridgeSettings, LogFormat, LoggingSettings, ServerSettings, Settings, UpstreamSettings,
};
