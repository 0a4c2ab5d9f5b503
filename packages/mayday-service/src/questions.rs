use serde::Serialize;

use crate::Assistant;

/// Category order of the suggestion list. Public templates are filed under `Support`.
pub const QUESTION_CATEGORIES: [&str; 5] = ["RH", "Finance", "Support", "Self-Care", "Academy"];

const GATED_CATEGORIES: [&str; 4] = ["RH", "Finance", "Self-Care", "Academy"];
const PUBLIC_CATEGORY: &str = "Support";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionCategory {
	pub name: &'static str,
	pub questions: Vec<String>,
}

impl Assistant {
	/// Example questions by category, built from the first pattern of each template.
	pub fn available_questions(&self) -> Vec<QuestionCategory> {
		let mut categories: Vec<QuestionCategory> = QUESTION_CATEGORIES
			.into_iter()
			.map(|name| QuestionCategory { name, questions: Vec::new() })
			.collect();

		for template in self.templates.templates() {
			let Some(pattern) = template.query_patterns.first() else { continue };
			let category = if template.is_public() {
				Some(PUBLIC_CATEGORY)
			} else {
				GATED_CATEGORIES
					.iter()
					.copied()
					.find(|name| template.required_teams.iter().any(|team| team == name))
			};
			let Some(category) = category else { continue };

			if let Some(entry) = categories.iter_mut().find(|entry| entry.name == category) {
				entry.questions.push(capitalize(pattern));
			}
		}

		categories
	}
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	let Some(first) = chars.next() else { return String::new() };

	first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
}
