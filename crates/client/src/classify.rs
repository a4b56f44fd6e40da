//! Keyword classification of free-text alert and article content
//!
//! Rules are explicit ordered lists scanned first-match-wins. The
//! ordering is a deliberate tie-break ("severe flood warning" is high
//! severity because "severe" outranks "warning") and must be kept
//! stable for reproducible classification.

use dgw_types::{DisasterType, Severity};

/// Ordered hazard-type rules; earlier rows win
const TYPE_RULES: &[(DisasterType, &[&str])] = &[
	(DisasterType::Flood, &["flood", "rain"]),
	(DisasterType::Wildfire, &["fire", "wildfire"]),
	(
		DisasterType::Hurricane,
		&["hurricane", "storm", "wind", "tornado"],
	),
	(DisasterType::Earthquake, &["earthquake", "tremor", "quake"]),
];

/// Ordered severity rules; earlier rows win
const SEVERITY_RULES: &[(Severity, &[&str])] = &[
	(
		Severity::Critical,
		&["devastating", "catastrophic", "emergency", "evacuate"],
	),
	(Severity::High, &["severe", "major", "significant"]),
	(Severity::Medium, &["moderate", "warning"]),
];

/// Classify hazard type by case-insensitive substring match
pub fn classify_type(text: &str) -> DisasterType {
	let text = text.to_lowercase();
	for (kind, keywords) in TYPE_RULES {
		if keywords.iter().any(|keyword| text.contains(keyword)) {
			return *kind;
		}
	}
	DisasterType::Other
}

/// Classify severity by case-insensitive substring match
pub fn classify_severity(text: &str) -> Severity {
	let text = text.to_lowercase();
	for (severity, keywords) in SEVERITY_RULES {
		if keywords.iter().any(|keyword| text.contains(keyword)) {
			return *severity;
		}
	}
	Severity::Low
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn severe_flood_warning_is_flood_and_high() {
		let text = "Severe flood warning issued";
		assert_eq!(classify_type(text), DisasterType::Flood);
		// "severe" must win over the lower-priority "warning".
		assert_eq!(classify_severity(text), Severity::High);
	}

	#[test]
	fn type_rules_match_case_insensitively() {
		assert_eq!(classify_type("WILDFIRE spreading"), DisasterType::Wildfire);
		assert_eq!(classify_type("Hurricane approaching"), DisasterType::Hurricane);
		assert_eq!(classify_type("Minor tremor recorded"), DisasterType::Earthquake);
		assert_eq!(classify_type("Heat advisory"), DisasterType::Other);
	}

	#[test]
	fn flood_rule_outranks_hurricane_rule() {
		// Contains both "rain" and "storm"; the flood row is scanned first.
		assert_eq!(
			classify_type("Rainstorm moving inland"),
			DisasterType::Flood
		);
	}

	#[test]
	fn severity_defaults_to_low() {
		assert_eq!(classify_severity("light drizzle expected"), Severity::Low);
	}

	#[test]
	fn evacuation_text_is_critical() {
		assert_eq!(
			classify_severity("Residents urged to evacuate immediately"),
			Severity::Critical
		);
	}
}
