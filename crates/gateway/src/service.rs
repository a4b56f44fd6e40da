//! Gateway dispatch service
//!
//! Stateless per request: one inbound request maps to exactly one
//! upstream call (no retry), and concurrent dispatches share nothing
//! but the read-only route table and credentials.

use std::time::Duration;

use dgw_config::{ProviderSettings, Settings};
use dgw_types::{GatewayError, HttpMethod, ServiceRequest, ServiceResponse, UpstreamCall};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::fixtures;
use crate::routes::RouteTable;

/// Why an upstream call could not produce live JSON
///
/// Every variant is recovered by fixture substitution; none of them
/// reaches the caller as a hard failure.
#[derive(Error, Debug)]
enum UpstreamFailure {
	#[error("upstream returned status {0}")]
	Status(reqwest::StatusCode),

	#[error("upstream returned non-JSON content type '{0}'")]
	ContentType(String),

	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),
}

/// Server-side proxy gateway
pub struct GatewayService {
	client: reqwest::Client,
	routes: RouteTable,
	providers: ProviderSettings,
}

impl GatewayService {
	/// Build a gateway from settings. Credentials are read once here
	/// and treated as immutable for the process lifetime.
	pub fn new(settings: &Settings) -> Result<Self, GatewayError> {
		let client = reqwest::Client::builder()
			.timeout(Duration::from_millis(settings.timeouts.upstream_ms))
			.build()?;

		Ok(Self {
			client,
			routes: RouteTable::default(),
			providers: settings.providers.clone(),
		})
	}

	/// Replace the route table (tests point it at stub servers)
	pub fn with_routes(mut self, routes: RouteTable) -> Self {
		self.routes = routes;
		self
	}

	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Dispatch one validated request
	///
	/// Returns a data-bearing response on every handled path: live
	/// upstream JSON, or the service's fixture when the upstream
	/// fails. An error response is produced only when the request
	/// cannot be resolved into an upstream call at all.
	pub async fn dispatch(&self, request: &ServiceRequest) -> ServiceResponse {
		let credential = self.providers.credential(request.service);
		let call = match self.routes.build_upstream_call(request, credential) {
			Ok(call) => call,
			Err(e) => {
				warn!(service = %request.service, "failed to resolve upstream call: {e}");
				return ServiceResponse::failed(e.to_string());
			}
		};

		// The resolved URL carries the credential; log the logical
		// request only.
		debug!(
			service = %request.service,
			endpoint = %request.endpoint,
			"dispatching upstream call"
		);

		match self.execute(&call).await {
			Ok(data) => ServiceResponse::live(data),
			Err(failure) => {
				warn!(
					service = %request.service,
					endpoint = %request.endpoint,
					%failure,
					"upstream call failed, serving fixture data"
				);
				ServiceResponse::fallback(fixtures::for_service(request.service))
			}
		}
	}

	async fn execute(&self, call: &UpstreamCall) -> Result<Value, UpstreamFailure> {
		let mut request = match call.method {
			HttpMethod::Get => self.client.get(&call.url),
			HttpMethod::Post => self.client.post(&call.url),
		};
		for (name, value) in &call.headers {
			request = request.header(name, value);
		}
		if let Some(body) = &call.body {
			request = request.body(body.clone());
		}

		let response = request.send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(UpstreamFailure::Status(status));
		}

		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.unwrap_or_default()
			.to_string();
		if !content_type.contains("application/json") {
			return Err(UpstreamFailure::ContentType(content_type));
		}

		Ok(response.json::<Value>().await?)
	}
}
