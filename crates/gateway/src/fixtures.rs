//! Canned per-service payloads served when an upstream call fails
//!
//! Fixture substitution is a product decision, not a bug: the UI must
//! never block on a provider outage. Payloads are deterministic (fixed
//! timestamps) so tests can assert exact equality, and responses built
//! from them carry `source: fallback`.

use dgw_types::Service;
use serde_json::{json, Value};

/// Fixed reference instant used by all fixtures, epoch milliseconds
/// (2024-06-01T12:00:00Z).
pub const FIXTURE_EPOCH_MS: i64 = 1_717_243_200_000;

/// Fixture payload for the given service
pub fn for_service(service: Service) -> Value {
	match service {
		Service::Weather => weather(),
		Service::News => news(),
		Service::Gemini => gemini(),
		Service::Nasa => nasa(),
	}
}

pub fn weather() -> Value {
	json!({
		"alerts": [
			{
				"event": "Flood Warning",
				"urgency": "Expected",
				"severity": "Moderate",
				"start": FIXTURE_EPOCH_MS
			},
			{
				"event": "Thunderstorm Watch",
				"urgency": "Expected",
				"severity": "Minor",
				"start": FIXTURE_EPOCH_MS + 3_600_000
			}
		],
		"current": {
			"temp": 28,
			"humidity": 65,
			"wind_speed": 12
		}
	})
}

pub fn news() -> Value {
	json!({
		"articles": [
			{
				"title": "Heavy Rainfall Causes Flooding in Southeast Region",
				"description": "Several areas have been evacuated as water levels continue to rise.",
				"url": "https://example.com/news/1",
				"publishedAt": "2024-06-01T12:00:00Z"
			},
			{
				"title": "Wildfire Alert Issued for Western Counties",
				"description": "Dry conditions and high winds have increased fire risk.",
				"url": "https://example.com/news/2",
				"publishedAt": "2024-06-01T11:00:00Z"
			},
			{
				"title": "Hurricane Season Forecast: What to Expect",
				"description": "Meteorologists predict above-average hurricane activity this year.",
				"url": "https://example.com/news/3",
				"publishedAt": "2024-06-01T10:00:00Z"
			}
		]
	})
}

pub fn gemini() -> Value {
	let reply = r#"Based on the available data, I've analyzed the disaster risk for your location:

{
  "riskLevel": "medium",
  "disasterTypes": [
    {"type": "flood", "probability": "60%", "severity": "medium"},
    {"type": "wildfire", "probability": "25%", "severity": "low"},
    {"type": "hurricane", "probability": "40%", "severity": "high"}
  ],
  "areasOfConcern": [
    "Low-lying regions near water bodies",
    "Areas with poor drainage systems",
    "Coastal regions susceptible to storm surge"
  ],
  "recommendations": [
    "Keep emergency supplies ready including water, non-perishable food, and medications",
    "Stay informed through local news and weather alerts",
    "Ensure proper drainage around your property",
    "Have an evacuation plan ready and discuss it with family members"
  ]
}"#;

	json!({
		"candidates": [
			{
				"content": {
					"parts": [
						{"text": reply}
					]
				}
			}
		]
	})
}

pub fn nasa() -> Value {
	json!({
		"id": "LC8_L1T_TOA/LC80440342024150LGN00",
		"date": "2024-06-01T12:00:00Z",
		"url": "https://example.com/nasa/earth-assets/demo.png"
	})
}
