//! Shared helpers for integration tests

pub mod test_server;
pub mod upstream;

use disaster_gateway::{RouteTable, SecretString, Service, Settings};

/// Settings with a dummy credential for every provider
#[allow(dead_code)]
pub fn test_settings() -> Settings {
	let mut settings = Settings::default();
	settings.providers.weather_api_key = Some(SecretString::from("test-weather-key"));
	settings.providers.news_api_key = Some(SecretString::from("test-news-key"));
	settings.providers.gemini_api_key = Some(SecretString::from("test-gemini-key"));
	settings.providers.nasa_api_key = Some(SecretString::from("test-nasa-key"));
	settings
}

/// Route table aiming every provider at the same stub server
#[allow(dead_code)]
pub fn routes_to(base_url: &str) -> RouteTable {
	let mut routes = RouteTable::default();
	for service in Service::ALL {
		routes.set_base_url(service, base_url);
	}
	routes
}
