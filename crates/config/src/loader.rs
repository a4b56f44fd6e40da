//! Configuration loading utilities

use config::{Config, File};

use crate::Settings;

pub use config::ConfigError;

/// Load configuration from the optional config file, then overlay
/// provider credentials from the process environment.
pub fn load_config() -> Result<Settings, ConfigError> {
	let source = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	let mut settings: Settings = source.try_deserialize()?;
	settings.providers.apply_env();
	Ok(settings)
}
