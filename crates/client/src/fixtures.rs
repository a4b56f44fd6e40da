//! Client-local fixture payloads
//!
//! A second, independent copy of canned data, deliberately simpler
//! than the gateway's fixtures. Used when the gateway itself cannot
//! be reached, so the client keeps working with zero connectivity.

use dgw_types::Service;
use serde_json::{json, Value};

/// Fixed reference instant, epoch milliseconds (2024-06-01T12:00:00Z)
pub const FIXTURE_EPOCH_MS: i64 = 1_717_243_200_000;

/// Local fixture payload for the given service
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
			}
		]
	})
}

pub fn gemini() -> Value {
	let reply = r#"Offline estimate:

{
  "riskLevel": "medium",
  "disasterTypes": [
    {"type": "flood", "probability": "60%", "severity": "medium"}
  ],
  "areasOfConcern": ["Low-lying regions near water bodies"],
  "recommendations": ["Keep emergency supplies ready", "Stay informed through local alerts"]
}"#;

	json!({
		"candidates": [
			{"content": {"parts": [{"text": reply}]}}
		]
	})
}

pub fn nasa() -> Value {
	json!({
		"date": "2024-06-01T12:00:00Z",
		"url": "https://example.com/nasa/earth-assets/offline.png"
	})
}
