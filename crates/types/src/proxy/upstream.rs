//! Concrete upstream call derived from a logical request
//!
//! An `UpstreamCall` exists for the duration of one gateway dispatch.
//! It is a plain value so resolution can be tested without touching
//! the network.

/// HTTP method used against the upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
	Get,
	Post,
}

/// Where a provider expects its credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialPlacement {
	/// Appended to the URL as `?{name}={key}`
	QueryParam(&'static str),
	/// Sent as the `{name}` request header
	Header(&'static str),
}

/// One fully-resolved upstream HTTP call
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamCall {
	pub url: String,
	pub method: HttpMethod,
	pub headers: Vec<(String, String)>,
	pub body: Option<String>,
}

impl UpstreamCall {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
