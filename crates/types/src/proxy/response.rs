//! Gateway response envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a payload came from the upstream provider or from a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
	Live,
	Fallback,
}

/// Result of one gateway dispatch
///
/// Exactly one of `data` / `error` is set; the constructors below are
/// the only intended way to build one. `source` tags data-bearing
/// responses so callers can tell live payloads from fixture
/// substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source: Option<DataSource>,
}

impl ServiceResponse {
	/// Successful response carrying the upstream payload
	pub fn live(data: Value) -> Self {
		Self {
			data: Some(data),
			error: None,
			source: Some(DataSource::Live),
		}
	}

	/// Response carrying a fixture substituted for a failed upstream call
	pub fn fallback(data: Value) -> Self {
		Self {
			data: Some(data),
			error: None,
			source: Some(DataSource::Fallback),
		}
	}

	/// Unrecoverable per-call failure (unknown service, malformed request)
	pub fn failed(error: impl Into<String>) -> Self {
		Self {
			data: None,
			error: Some(error.into()),
			source: None,
		}
	}

	pub fn is_error(&self) -> bool {
		self.error.is_some()
	}

	pub fn is_fallback(&self) -> bool {
		self.source == Some(DataSource::Fallback)
	}
}
