//! Per-provider resolution rules
//!
//! The route table is the only piece of per-provider knowledge in the
//! system: base URL, credential placement, HTTP method, and how params
//! are serialized. Adding a provider means adding one row, not new
//! control flow.

use dgw_types::{
	CredentialPlacement, GatewayError, HttpMethod, SecretString, Service, ServiceRequest,
	UpstreamCall,
};
use serde_json::Value;
use url::Url;

/// How a request's params reach the upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsMode {
	/// Serialized onto the URL as a query string
	Query,
	/// Serialized as a JSON request body
	JsonBody,
}

/// How a request's endpoint contributes to the upstream URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointMode {
	/// Joined onto the base URL as a path suffix
	Append,
	/// Discarded; the base URL is already the complete endpoint
	Ignore,
}

/// Resolution rule for one provider
#[derive(Debug, Clone)]
pub struct ProviderRoute {
	pub base_url: String,
	pub credential: CredentialPlacement,
	pub method: HttpMethod,
	pub params: ParamsMode,
	pub endpoint: EndpointMode,
}

/// Resolution rules for every supported service
#[derive(Debug, Clone)]
pub struct RouteTable {
	weather: ProviderRoute,
	news: ProviderRoute,
	gemini: ProviderRoute,
	nasa: ProviderRoute,
}

impl Default for RouteTable {
	fn default() -> Self {
		Self {
			weather: ProviderRoute {
				base_url: "https://api.openweathermap.org/data/2.5".to_string(),
				credential: CredentialPlacement::QueryParam("appid"),
				method: HttpMethod::Get,
				params: ParamsMode::Query,
				endpoint: EndpointMode::Append,
			},
			news: ProviderRoute {
				base_url: "https://newsapi.org/v2".to_string(),
				credential: CredentialPlacement::QueryParam("apiKey"),
				method: HttpMethod::Get,
				params: ParamsMode::Query,
				endpoint: EndpointMode::Append,
			},
			// The model URL is a fixed, fully-qualified endpoint; callers
			// still send `generateContent` on the wire, and it is dropped
			// here rather than doubled onto the path.
			gemini: ProviderRoute {
				base_url:
					"https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
						.to_string(),
				credential: CredentialPlacement::QueryParam("key"),
				method: HttpMethod::Post,
				params: ParamsMode::JsonBody,
				endpoint: EndpointMode::Ignore,
			},
			nasa: ProviderRoute {
				base_url: "https://api.nasa.gov".to_string(),
				credential: CredentialPlacement::QueryParam("api_key"),
				method: HttpMethod::Get,
				params: ParamsMode::Query,
				endpoint: EndpointMode::Append,
			},
		}
	}
}

impl RouteTable {
	pub fn route(&self, service: Service) -> &ProviderRoute {
		match service {
			Service::Weather => &self.weather,
			Service::News => &self.news,
			Service::Gemini => &self.gemini,
			Service::Nasa => &self.nasa,
		}
	}

	/// Replace the rule for one service
	pub fn set_route(&mut self, service: Service, route: ProviderRoute) {
		match service {
			Service::Weather => self.weather = route,
			Service::News => self.news = route,
			Service::Gemini => self.gemini = route,
			Service::Nasa => self.nasa = route,
		}
	}

	/// Point one service at a different base URL, keeping the rest of
	/// its rule. Used to aim the gateway at stub servers in tests.
	pub fn set_base_url(&mut self, service: Service, base_url: impl Into<String>) {
		let mut route = self.route(service).clone();
		route.base_url = base_url.into();
		self.set_route(service, route);
	}

	/// Resolve a validated request into one concrete upstream call
	///
	/// Pure derivation: no I/O happens here. The credential lands in
	/// exactly the location the service's rule specifies; an absent
	/// credential is sent as an empty value so the upstream rejects
	/// the call itself (observed behavior of the original system).
	pub fn build_upstream_call(
		&self,
		request: &ServiceRequest,
		credential: Option<&SecretString>,
	) -> Result<UpstreamCall, GatewayError> {
		let route = self.route(request.service);
		let key = credential.map(SecretString::expose_secret).unwrap_or("");

		let raw_url = match route.endpoint {
			EndpointMode::Ignore => route.base_url.clone(),
			EndpointMode::Append if request.endpoint.is_empty() => route.base_url.clone(),
			EndpointMode::Append => format!(
				"{}/{}",
				route.base_url.trim_end_matches('/'),
				request.endpoint.trim_start_matches('/')
			),
		};
		let mut url = Url::parse(&raw_url)
			.map_err(|e| GatewayError::InvalidUrl(format!("{raw_url}: {e}")))?;

		let mut headers = Vec::new();
		match &route.credential {
			CredentialPlacement::QueryParam(name) => {
				url.query_pairs_mut().append_pair(name, key);
			}
			CredentialPlacement::Header(name) => {
				headers.push((name.to_string(), key.to_string()));
			}
		}

		let body = match route.params {
			ParamsMode::Query => {
				for (name, value) in &request.params {
					url.query_pairs_mut()
						.append_pair(name, &scalar_text(value));
				}
				None
			}
			ParamsMode::JsonBody => {
				headers.push(("Content-Type".to_string(), "application/json".to_string()));
				Some(Value::Object(request.params.clone()).to_string())
			}
		};

		Ok(UpstreamCall {
			url: url.into(),
			method: route.method,
			headers,
			body,
		})
	}
}

/// Query-string text for one param value; strings lose their quotes,
/// everything else keeps its JSON form.
fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
