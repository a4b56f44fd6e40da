//! Structured risk assessment parsed from the model's free-text reply

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-hazard forecast entry inside a risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterForecast {
	#[serde(rename = "type")]
	pub disaster_type: String,
	#[serde(default)]
	pub probability: String,
	#[serde(default)]
	pub severity: String,
}

/// Risk assessment for one location
///
/// Field names follow the JSON the model is prompted to emit
/// (`riskLevel`, `disasterTypes`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterRisk {
	pub risk_level: String,
	#[serde(default)]
	pub disaster_types: Vec<DisasterForecast>,
	#[serde(default)]
	pub areas_of_concern: Vec<String>,
	#[serde(default)]
	pub recommendations: Vec<String>,
}

/// Recoverable failures while extracting a risk assessment from a reply
#[derive(Error, Debug)]
pub enum RiskParseError {
	#[error("reply contains no JSON object")]
	MissingJson,

	#[error("embedded JSON is not a risk assessment: {0}")]
	Json(#[from] serde_json::Error),
}
