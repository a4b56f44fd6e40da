//! Synthesis of map-displayable events from provider payloads
//!
//! Events are heuristic: hazard type and severity come from keyword
//! classification over alert/article text, and article locations come
//! from a fixed whitelist of state names. The event set is rebuilt
//! from scratch on every refresh.

use chrono::{DateTime, Utc};
use dgw_types::{Coordinates, DisasterEvent, NewsFeed, WeatherReport};
use uuid::Uuid;

use crate::classify::{classify_severity, classify_type};

/// One fixed geographic region scanned on every map refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
	pub name: &'static str,
	pub lat: f64,
	pub lon: f64,
}

impl Region {
	pub fn coordinates(&self) -> Coordinates {
		Coordinates::new(self.lat, self.lon)
	}
}

/// The regions the map view polls, and the location whitelist for
/// news articles. Articles mentioning none of these are dropped
/// silently.
pub const REGIONS: &[Region] = &[
	Region {
		name: "California",
		lat: 36.7783,
		lon: -119.4179,
	},
	Region {
		name: "Texas",
		lat: 31.9686,
		lon: -99.9018,
	},
	Region {
		name: "Florida",
		lat: 27.6648,
		lon: -81.5158,
	},
	Region {
		name: "New York",
		lat: 40.7128,
		lon: -74.0060,
	},
	Region {
		name: "Washington",
		lat: 47.7511,
		lon: -120.7401,
	},
];

/// Events for the active alerts of one region's weather report
pub fn events_from_weather(region: &Region, report: &WeatherReport) -> Vec<DisasterEvent> {
	report
		.alerts
		.iter()
		.map(|alert| {
			let text = alert.descriptive_text();
			DisasterEvent {
				id: Uuid::new_v4().to_string(),
				event_type: classify_type(&text),
				location: region.name.to_string(),
				coordinates: region.coordinates(),
				severity: classify_severity(&text),
				timestamp: millis_or_now(alert.start),
			}
		})
		.collect()
}

/// Events for the articles of one news feed
///
/// Location extraction is a whitelist substring scan; the first
/// matching region names the event, and unmatched articles produce
/// nothing.
pub fn events_from_news(feed: &NewsFeed) -> Vec<DisasterEvent> {
	feed.articles
		.iter()
		.filter_map(|article| {
			let text = article.descriptive_text();
			let region = REGIONS.iter().find(|region| text.contains(region.name))?;
			Some(DisasterEvent {
				id: Uuid::new_v4().to_string(),
				event_type: classify_type(&text),
				location: region.name.to_string(),
				coordinates: region.coordinates(),
				severity: classify_severity(&text),
				timestamp: rfc3339_or_now(&article.published_at),
			})
		})
		.collect()
}

fn millis_or_now(millis: i64) -> DateTime<Utc> {
	DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

fn rfc3339_or_now(text: &str) -> DateTime<Utc> {
	DateTime::parse_from_rfc3339(text)
		.map(|parsed| parsed.with_timezone(&Utc))
		.unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
	use super::*;
	use dgw_types::{DisasterType, NewsArticle, Severity, WeatherAlert};

	#[test]
	fn texas_wildfire_evacuation_article_becomes_a_critical_event() {
		let feed = NewsFeed {
			articles: vec![NewsArticle {
				title: "Wildfire forces Texas towns to evacuate".to_string(),
				description: "Thousands flee as flames spread.".to_string(),
				url: "https://example.com/news/tx".to_string(),
				published_at: "2024-06-01T12:00:00Z".to_string(),
			}],
		};

		let events = events_from_news(&feed);
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].location, "Texas");
		assert_eq!(events[0].event_type, DisasterType::Wildfire);
		assert_eq!(events[0].severity, Severity::Critical);
		assert_eq!(events[0].coordinates.lat, 31.9686);
	}

	#[test]
	fn articles_without_a_whitelisted_location_are_dropped() {
		let feed = NewsFeed {
			articles: vec![NewsArticle {
				title: "Flooding reported across the region".to_string(),
				description: "Rivers overflow after a week of rain.".to_string(),
				..NewsArticle::default()
			}],
		};
		assert!(events_from_news(&feed).is_empty());
	}

	#[test]
	fn weather_alerts_become_events_at_the_region_coordinates() {
		let region = &REGIONS[0];
		let report = WeatherReport {
			alerts: vec![WeatherAlert {
				event: Some("Severe flood warning".to_string()),
				urgency: Some("Immediate".to_string()),
				severity: None,
				start: 1_717_243_200_000,
			}],
			current: None,
		};

		let events = events_from_weather(region, &report);
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].location, "California");
		assert_eq!(events[0].event_type, DisasterType::Flood);
		assert_eq!(events[0].severity, Severity::High);
		assert_eq!(
			events[0].timestamp.to_rfc3339(),
			"2024-06-01T12:00:00+00:00"
		);
	}

	#[test]
	fn empty_report_yields_no_events() {
		let events = events_from_weather(&REGIONS[1], &WeatherReport::default());
		assert!(events.is_empty());
	}
}
