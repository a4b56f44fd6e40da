//! Map-displayable hazard events synthesized from provider data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hazard category derived from alert or article text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
	Wildfire,
	Flood,
	Hurricane,
	Earthquake,
	Other,
}

impl DisasterType {
	pub fn as_str(&self) -> &'static str {
		match self {
			DisasterType::Wildfire => "wildfire",
			DisasterType::Flood => "flood",
			DisasterType::Hurricane => "hurricane",
			DisasterType::Earthquake => "earthquake",
			DisasterType::Other => "other",
		}
	}
}

/// Severity bucket derived from urgency or content keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Low,
	Medium,
	High,
	Critical,
}

impl Severity {
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Low => "low",
			Severity::Medium => "medium",
			Severity::High => "high",
			Severity::Critical => "critical",
		}
	}
}

/// Geographic point, degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lon: f64,
}

impl Coordinates {
	pub fn new(lat: f64, lon: f64) -> Self {
		Self { lat, lon }
	}

	pub fn is_finite(&self) -> bool {
		self.lat.is_finite() && self.lon.is_finite()
	}
}

/// One map-displayable hazard occurrence
///
/// Events are rebuilt from scratch on every fetch cycle; there is no
/// merge or diff against the previous set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterEvent {
	pub id: String,
	#[serde(rename = "type")]
	pub event_type: DisasterType,
	pub location: String,
	pub coordinates: Coordinates,
	pub severity: Severity,
	pub timestamp: DateTime<Utc>,
}
