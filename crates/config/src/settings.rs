//! Configuration settings structures

use dgw_types::{SecretString, Service};
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: ProviderSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Upstream provider credentials, one per service
///
/// Values may come from the config file or from the environment
/// variables the original deployment used; the environment wins.
/// Loaded once at startup and immutable for the process lifetime.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ProviderSettings {
	pub weather_api_key: Option<SecretString>,
	pub news_api_key: Option<SecretString>,
	pub gemini_api_key: Option<SecretString>,
	pub nasa_api_key: Option<SecretString>,
}

/// Environment variable consulted for each provider credential
const ENV_KEYS: [(Service, &str); 4] = [
	(Service::Weather, "OPENWEATHERMAP_API_KEY"),
	(Service::News, "NEWS_API_KEY"),
	(Service::Gemini, "GEMINI_API_KEY"),
	(Service::Nasa, "NASA_FLOOD_API_KEY"),
];

impl ProviderSettings {
	/// Credential configured for the given service, if any
	pub fn credential(&self, service: Service) -> Option<&SecretString> {
		let slot = match service {
			Service::Weather => &self.weather_api_key,
			Service::News => &self.news_api_key,
			Service::Gemini => &self.gemini_api_key,
			Service::Nasa => &self.nasa_api_key,
		};
		slot.as_ref().filter(|key| !key.is_empty())
	}

	/// Overlay credentials from the process environment
	pub fn apply_env(&mut self) {
		for (service, var) in ENV_KEYS {
			if let Ok(value) = std::env::var(var) {
				if value.is_empty() {
					continue;
				}
				let slot = match service {
					Service::Weather => &mut self.weather_api_key,
					Service::News => &mut self.news_api_key,
					Service::Gemini => &mut self.gemini_api_key,
					Service::Nasa => &mut self.nasa_api_key,
				};
				*slot = Some(SecretString::new(value));
			}
		}
	}

	/// Services with no usable credential configured
	pub fn missing(&self) -> Vec<Service> {
		Service::ALL
			.into_iter()
			.filter(|service| self.credential(*service).is_none())
			.collect()
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Upstream request timeout in milliseconds
	pub upstream_ms: u64,
	/// Client-to-gateway request timeout in milliseconds
	pub client_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			upstream_ms: 10_000,
			client_ms: 10_000,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}

/// Log output formats
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	#[default]
	Compact,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_bind_all_interfaces() {
		let settings = Settings::default();
		assert_eq!(settings.bind_address(), "0.0.0.0:8080");
		assert_eq!(settings.timeouts.upstream_ms, 10_000);
	}

	#[test]
	fn empty_credential_counts_as_missing() {
		let providers = ProviderSettings {
			weather_api_key: Some(SecretString::from("")),
			..ProviderSettings::default()
		};
		assert!(providers.credential(Service::Weather).is_none());
		assert_eq!(providers.missing().len(), 4);
	}

	#[test]
	fn configured_credential_is_returned() {
		let providers = ProviderSettings {
			news_api_key: Some(SecretString::from("news-key")),
			..ProviderSettings::default()
		};
		let key = providers.credential(Service::News).unwrap();
		assert_eq!(key.expose_secret(), "news-key");
		assert_eq!(providers.missing().len(), 3);
	}
}
