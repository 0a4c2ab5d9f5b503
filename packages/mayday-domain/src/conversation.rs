use serde::{Deserialize, Serialize};

use crate::{Confidence, Document};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	User,
	Assistant,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ConversationTurn {
	pub role: Role,
	pub content: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub sources: Vec<Document>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub confidence: Option<Confidence>,
}
impl ConversationTurn {
	pub fn user(content: impl Into<String>) -> Self {
		Self { role: Role::User, content: content.into(), sources: Vec::new(), confidence: None }
	}

	pub fn assistant(
		content: impl Into<String>,
		sources: Vec<Document>,
		confidence: Confidence,
	) -> Self {
		Self {
			role: Role::Assistant,
			content: content.into(),
			sources,
			confidence: Some(confidence),
		}
	}
}
