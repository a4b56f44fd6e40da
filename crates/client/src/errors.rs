//! Error types for client operations
//!
//! These cover caller mistakes only (bad parameters, unusable
//! configuration). Connectivity and upstream failures never surface
//! here; they are absorbed by fixture fallback.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
	#[error("coordinates must be finite numbers: lat={lat}, lon={lon}")]
	InvalidCoordinates { lat: f64, lon: f64 },

	#[error("query must not be empty")]
	EmptyQuery,

	#[error("location must not be empty")]
	EmptyLocation,

	#[error("HTTP client construction failed: {0}")]
	Http(#[from] reqwest::Error),
}
