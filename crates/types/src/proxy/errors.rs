//! Error types for gateway operations

use thiserror::Error;

/// Errors surfaced by the proxy gateway
///
/// Only `UnknownService` and `MalformedRequest` travel to the caller
/// as `{error}` responses; upstream failures are absorbed by fixture
/// substitution and never appear here.
#[derive(Error, Debug)]
pub enum GatewayError {
	#[error("unknown service: {0}")]
	UnknownService(String),

	#[error("malformed request: {0}")]
	MalformedRequest(String),

	#[error("invalid upstream url: {0}")]
	InvalidUrl(String),

	#[error("HTTP client error: {0}")]
	Http(#[from] reqwest::Error),
}

impl GatewayError {
	/// True for errors caused by the caller's request rather than by
	/// this process or the upstream provider.
	pub fn is_request_error(&self) -> bool {
		matches!(
			self,
			GatewayError::UnknownService(_) | GatewayError::MalformedRequest(_)
		)
	}
}
