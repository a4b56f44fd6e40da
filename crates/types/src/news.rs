//! News provider response shapes

use serde::{Deserialize, Serialize};

/// One article returned by the news search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub url: String,
	#[serde(default, rename = "publishedAt")]
	pub published_at: String,
}

impl NewsArticle {
	/// Concatenated text used for keyword classification and the
	/// location whitelist scan.
	pub fn descriptive_text(&self) -> String {
		format!("{} {}", self.title, self.description)
	}
}

/// News payload for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
	#[serde(default)]
	pub articles: Vec<NewsArticle>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn feed_decodes_with_wire_field_names() {
		let feed: NewsFeed = serde_json::from_value(json!({
			"articles": [{
				"title": "Wildfire Alert Issued for Western Counties",
				"description": "Dry conditions and high winds have increased fire risk.",
				"url": "https://example.com/news/2",
				"publishedAt": "2024-06-01T11:00:00Z"
			}]
		}))
		.unwrap();

		assert_eq!(feed.articles.len(), 1);
		assert_eq!(feed.articles[0].published_at, "2024-06-01T11:00:00Z");
	}
}
