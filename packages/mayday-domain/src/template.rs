use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
	High,
	#[default]
	Medium,
	Low,
	None,
}
impl Confidence {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::High => "high",
			Self::Medium => "medium",
			Self::Low => "low",
			Self::None => "none",
		}
	}
}

/// A canned answer selected by substring match on the query.
///
/// `required_teams` keeps its declared order; the first entry is the team named in the
/// restricted-access message. An empty list makes the template public.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ResponseTemplate {
	pub key: String,
	#[serde(default)]
	pub query_patterns: Vec<String>,
	#[serde(default)]
	pub required_teams: Vec<String>,
	pub response: String,
	#[serde(default)]
	pub sources: Vec<String>,
	#[serde(default)]
	pub confidence: Confidence,
}
impl ResponseTemplate {
	pub fn is_public(&self) -> bool {
		self.required_teams.is_empty()
	}

	/// Expects `normalized_query` to be trimmed and lower-cased already.
	pub fn matches(&self, normalized_query: &str) -> bool {
		self.query_patterns
			.iter()
			.any(|pattern| normalized_query.contains(pattern.to_lowercase().as_str()))
	}
}

pub fn normalize_query(query: &str) -> String {
	query.trim().to_lowercase()
}
