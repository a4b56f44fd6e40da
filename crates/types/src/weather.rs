//! Weather provider response shapes
//!
//! Every field is defaulted so that a payload with a drifting shape
//! still decodes into something the UI can render.

use serde::{Deserialize, Serialize};

/// One active weather alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
	#[serde(default)]
	pub event: Option<String>,
	#[serde(default)]
	pub urgency: Option<String>,
	#[serde(default)]
	pub severity: Option<String>,
	/// Alert start, epoch milliseconds
	#[serde(default)]
	pub start: i64,
}

impl WeatherAlert {
	/// Concatenated text used for keyword classification
	pub fn descriptive_text(&self) -> String {
		[&self.event, &self.urgency, &self.severity]
			.iter()
			.filter_map(|field| field.as_deref())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Current conditions at the queried point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
	#[serde(default)]
	pub temp: f64,
	#[serde(default)]
	pub humidity: f64,
	#[serde(default)]
	pub wind_speed: f64,
}

/// Weather payload for one coordinate pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
	#[serde(default)]
	pub alerts: Vec<WeatherAlert>,
	#[serde(default)]
	pub current: Option<CurrentConditions>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn report_decodes_with_missing_fields() {
		let report: WeatherReport = serde_json::from_value(json!({})).unwrap();
		assert!(report.alerts.is_empty());
		assert!(report.current.is_none());
	}

	#[test]
	fn alert_text_joins_present_fields() {
		let alert = WeatherAlert {
			event: Some("Flood Warning".to_string()),
			urgency: None,
			severity: Some("Moderate".to_string()),
			start: 0,
		};
		assert_eq!(alert.descriptive_text(), "Flood Warning Moderate");
	}
}
