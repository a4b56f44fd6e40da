//! Risk-analysis prompt construction and reply parsing
//!
//! The model is asked to embed a JSON object in its free-text reply.
//! Parsing locates the first `{` and the last `}` and treats that
//! span as the assessment; anything outside it is narrative and is
//! discarded. A reply without a valid span is a recoverable parse
//! error, never a crash.

use dgw_types::{DisasterRisk, RiskParseError};
use serde_json::Value;

/// Prompt template sent to the generative-text provider
pub fn build_prompt(location: &str, context: &Value) -> String {
	format!(
		r#"Analyze the disaster risk for {location} based on the following data:
{context}

Provide a risk assessment with the following information:
1. Overall risk level (low, medium, high, critical)
2. Most likely disaster types in the next 7 days
3. Specific areas of concern
4. Recommended preparedness actions

Format the response as a JSON object with the following structure:
{{
  "riskLevel": "low|medium|high|critical",
  "disasterTypes": [{{"type": "flood|wildfire|hurricane|earthquake", "probability": "percentage", "severity": "low|medium|high|critical"}}],
  "areasOfConcern": ["area1", "area2"],
  "recommendations": ["recommendation1", "recommendation2"]
}}"#
	)
}

/// Text of the first candidate reply, if the payload has one
pub fn reply_text(data: &Value) -> Option<&str> {
	data.get("candidates")?
		.get(0)?
		.get("content")?
		.get("parts")?
		.get(0)?
		.get("text")?
		.as_str()
}

/// The first-`{` .. last-`}` span of a reply
pub fn extract_json_span(text: &str) -> Option<&str> {
	let start = text.find('{')?;
	let end = text.rfind('}')?;
	if end < start {
		return None;
	}
	Some(&text[start..=end])
}

/// Parse a free-text reply into a risk assessment
pub fn parse_reply(text: &str) -> Result<DisasterRisk, RiskParseError> {
	let span = extract_json_span(text).ok_or(RiskParseError::MissingJson)?;
	Ok(serde_json::from_str(span)?)
}
