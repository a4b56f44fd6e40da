//! The typed gateway client

use std::sync::Arc;
use std::time::Duration;

use dgw_types::{
	DisasterEvent, DisasterRisk, NewsFeed, ProxyRequest, Service, ServiceResponse, WeatherReport,
};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::ClientError;
use crate::events::{events_from_news, events_from_weather, REGIONS};
use crate::fixtures;
use crate::notify::{Notifier, TracingNotifier};
use crate::risk;

/// Message surfaced whenever a helper falls back to local data
const OFFLINE_NOTICE: &str = "Connectivity issues detected. Using local data for demonstrations.";

/// Explicit client configuration; there is no global state
#[derive(Debug, Clone)]
pub struct ClientOptions {
	/// Gateway base URL, e.g. `http://127.0.0.1:8080`
	pub base_url: String,
	/// Per-request deadline for gateway round trips
	pub timeout: Duration,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			base_url: "http://127.0.0.1:8080".to_string(),
			timeout: Duration::from_secs(10),
		}
	}
}

/// Why a gateway round trip produced nothing usable
#[derive(Error, Debug)]
enum RoundTripFailure {
	#[error("gateway returned status {0}")]
	Status(reqwest::StatusCode),

	#[error("gateway reply was not valid JSON: {0}")]
	Decode(reqwest::Error),

	#[error("transport error: {0}")]
	Transport(reqwest::Error),
}

/// Typed fetch helpers over the proxy gateway
pub struct DisasterClient {
	http: reqwest::Client,
	base_url: String,
	notifier: Arc<dyn Notifier>,
}

impl DisasterClient {
	pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
		let http = reqwest::Client::builder()
			.timeout(options.timeout)
			.build()?;

		Ok(Self {
			http,
			base_url: options.base_url.trim_end_matches('/').to_string(),
			notifier: Arc::new(TracingNotifier),
		})
	}

	/// Replace the notification sink
	pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
		self.notifier = notifier;
		self
	}

	/// Fetch raw data for one service
	///
	/// Resolves on every path: the gateway's reply when it answers
	/// with JSON, or the client-local fixture (tagged `fallback`)
	/// when the gateway is unreachable, replies non-2xx, or replies
	/// with a body that does not decode.
	pub async fn fetch(
		&self,
		service: Service,
		endpoint: &str,
		params: Map<String, Value>,
	) -> ServiceResponse {
		let request = ProxyRequest {
			service: service.as_str().to_string(),
			endpoint: endpoint.to_string(),
			params,
		};

		match self.round_trip(&request).await {
			Ok(response) => response,
			Err(failure) => {
				warn!(service = %service, %failure, "gateway unreachable, using local fixture");
				self.notifier.notify(OFFLINE_NOTICE);
				ServiceResponse::fallback(fixtures::for_service(service))
			}
		}
	}

	async fn round_trip(&self, request: &ProxyRequest) -> Result<ServiceResponse, RoundTripFailure> {
		let url = format!("{}/api/v1/proxy", self.base_url);
		let response = self
			.http
			.post(&url)
			.json(request)
			.send()
			.await
			.map_err(RoundTripFailure::Transport)?;

		let status = response.status();
		if !status.is_success() {
			return Err(RoundTripFailure::Status(status));
		}

		response
			.json::<ServiceResponse>()
			.await
			.map_err(RoundTripFailure::Decode)
	}

	/// Current weather and active alerts for one coordinate pair
	pub async fn fetch_weather_alert(
		&self,
		lat: f64,
		lon: f64,
	) -> Result<WeatherReport, ClientError> {
		if !lat.is_finite() || !lon.is_finite() {
			return Err(ClientError::InvalidCoordinates { lat, lon });
		}

		let params = object(&[
			("lat", json!(lat)),
			("lon", json!(lon)),
			("exclude", json!("minutely,hourly")),
			("units", json!("metric")),
		]);
		let response = self.fetch(Service::Weather, "onecall", params).await;
		Ok(self.decode_payload(response, Service::Weather))
	}

	/// Recent disaster-related news for a free-text query
	pub async fn fetch_disaster_news(&self, query: &str) -> Result<NewsFeed, ClientError> {
		if query.trim().is_empty() {
			return Err(ClientError::EmptyQuery);
		}

		let params = object(&[
			("q", json!(query)),
			("sortBy", json!("publishedAt")),
			("pageSize", json!(10)),
		]);
		let response = self.fetch(Service::News, "everything", params).await;
		Ok(self.decode_payload(response, Service::News))
	}

	/// Satellite imagery metadata for one point
	pub async fn fetch_flood_imagery(
		&self,
		lon: f64,
		lat: f64,
		dim: f64,
	) -> Result<Value, ClientError> {
		if !lat.is_finite() || !lon.is_finite() {
			return Err(ClientError::InvalidCoordinates { lat, lon });
		}

		let params = object(&[("lon", json!(lon)), ("lat", json!(lat)), ("dim", json!(dim))]);
		let response = self.fetch(Service::Nasa, "earth/assets", params).await;
		Ok(response
			.data
			.unwrap_or_else(|| fixtures::for_service(Service::Nasa)))
	}

	/// Ask the generative provider for a structured risk assessment
	///
	/// Returns `Ok(None)` when the reply carries no parseable JSON
	/// span; the caller leaves its risk state empty instead of
	/// crashing.
	pub async fn analyze_disaster_risk(
		&self,
		location: &str,
		context: &Value,
	) -> Result<Option<DisasterRisk>, ClientError> {
		if location.trim().is_empty() {
			return Err(ClientError::EmptyLocation);
		}

		let prompt = risk::build_prompt(location, context);
		let params = object(&[(
			"contents",
			json!([{"parts": [{"text": prompt}]}]),
		)]);
		let response = self.fetch(Service::Gemini, "generateContent", params).await;

		let Some(data) = response.data else {
			return Ok(None);
		};
		let Some(text) = risk::reply_text(&data) else {
			warn!("model reply carried no candidate text");
			self.notifier
				.notify("Risk analysis is temporarily unavailable.");
			return Ok(None);
		};

		match risk::parse_reply(text) {
			Ok(assessment) => Ok(Some(assessment)),
			Err(e) => {
				warn!("could not parse risk assessment from reply: {e}");
				self.notifier
					.notify("Risk analysis is temporarily unavailable.");
				Ok(None)
			}
		}
	}

	/// Build the map view's event list
	///
	/// Fetches the fixed regions' weather concurrently (no ordering
	/// guarantee) together with one news query. Each fetch falls back
	/// independently, so one region's failure never blocks another's
	/// result.
	pub async fn collect_disaster_events(&self) -> Vec<DisasterEvent> {
		let weather = join_all(
			REGIONS
				.iter()
				.map(|region| self.fetch_weather_alert(region.lat, region.lon)),
		);
		let news = self.fetch_disaster_news("natural disaster");
		let (reports, feed) = futures::join!(weather, news);

		let mut events = Vec::new();
		for (region, report) in REGIONS.iter().zip(reports) {
			if let Ok(report) = report {
				events.extend(events_from_weather(region, &report));
			}
		}
		if let Ok(feed) = feed {
			events.extend(events_from_news(&feed));
		}

		info!(count = events.len(), "synthesized disaster events");
		events
	}

	/// Decode a data payload into its typed shape, falling back to the
	/// service's fixture when the payload does not fit.
	fn decode_payload<T>(&self, response: ServiceResponse, service: Service) -> T
	where
		T: DeserializeOwned + Default,
	{
		let value = response
			.data
			.unwrap_or_else(|| fixtures::for_service(service));

		match serde_json::from_value(value) {
			Ok(decoded) => decoded,
			Err(e) => {
				warn!(service = %service, "payload did not match the expected shape: {e}");
				self.notifier.notify(OFFLINE_NOTICE);
				serde_json::from_value(fixtures::for_service(service)).unwrap_or_default()
			}
		}
	}
}

fn object(pairs: &[(&str, Value)]) -> Map<String, Value> {
	pairs
		.iter()
		.map(|(name, value)| (name.to_string(), value.clone()))
		.collect()
}
