//! Logical proxy request shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::proxy::errors::GatewayError;

/// Upstream provider addressed by a proxy request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
	Weather,
	News,
	Gemini,
	Nasa,
}

impl Service {
	/// All supported services, in wire-name order
	pub const ALL: [Service; 4] = [
		Service::Weather,
		Service::News,
		Service::Gemini,
		Service::Nasa,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Service::Weather => "weather",
			Service::News => "news",
			Service::Gemini => "gemini",
			Service::Nasa => "nasa",
		}
	}
}

impl fmt::Display for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Service {
	type Err = GatewayError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"weather" => Ok(Service::Weather),
			"news" => Ok(Service::News),
			"gemini" => Ok(Service::Gemini),
			"nasa" => Ok(Service::Nasa),
			other => Err(GatewayError::UnknownService(other.to_string())),
		}
	}
}

/// Raw request body accepted by the proxy endpoint
///
/// `service` stays a plain string here so that unsupported values
/// surface as a per-call error response instead of a deserialization
/// rejection with no useful body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRequest {
	pub service: String,
	#[serde(default)]
	pub endpoint: String,
	#[serde(default)]
	pub params: Map<String, Value>,
}

/// Validated proxy request, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
	pub service: Service,
	pub endpoint: String,
	pub params: Map<String, Value>,
}

impl ServiceRequest {
	pub fn new(service: Service, endpoint: impl Into<String>, params: Map<String, Value>) -> Self {
		Self {
			service,
			endpoint: endpoint.into(),
			params,
		}
	}
}

impl TryFrom<ProxyRequest> for ServiceRequest {
	type Error = GatewayError;

	fn try_from(request: ProxyRequest) -> Result<Self, Self::Error> {
		Ok(Self {
			service: request.service.parse()?,
			endpoint: request.endpoint,
			params: request.params,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn service_parses_wire_names() {
		for service in Service::ALL {
			assert_eq!(service.as_str().parse::<Service>().unwrap(), service);
		}
	}

	#[test]
	fn unknown_service_is_an_error() {
		let err = "pager".parse::<Service>().unwrap_err();
		assert!(matches!(err, GatewayError::UnknownService(name) if name == "pager"));
	}

	#[test]
	fn wire_request_validates_into_service_request() {
		let wire: ProxyRequest = serde_json::from_value(json!({
			"service": "weather",
			"endpoint": "onecall",
			"params": {"lat": 37.7749, "lon": -122.4194}
		}))
		.unwrap();

		let request = ServiceRequest::try_from(wire).unwrap();
		assert_eq!(request.service, Service::Weather);
		assert_eq!(request.endpoint, "onecall");
		assert_eq!(request.params.len(), 2);
	}

	#[test]
	fn endpoint_and_params_are_optional_on_the_wire() {
		let wire: ProxyRequest = serde_json::from_value(json!({"service": "gemini"})).unwrap();
		let request = ServiceRequest::try_from(wire).unwrap();
		assert_eq!(request.endpoint, "");
		assert!(request.params.is_empty());
	}
}
