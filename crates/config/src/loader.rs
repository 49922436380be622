//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the default config file and environment
///
/// `config/config.toml` is optional; every setting has a default, and
/// `CROSSWAY_*` environment variables (e.g. `CROSSWAY_SERVER__PORT`)
/// override file values.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("CROSSWAY").separator("__"))
		.build()?;

	s.try_deserialize()
}
