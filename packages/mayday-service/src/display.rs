use serde::Serialize;

use mayday_domain::{Confidence, Document};

pub const FOLLOW_UP_PATTERNS: [&str; 8] = [
	"et les",
	"et le",
	"plus de détails",
	"autre chose",
	"et pour",
	"et si",
	"comment",
	"pourquoi",
];

const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
	Success,
	Warning,
	Error,
	Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfidenceDisplay {
	pub emoji: &'static str,
	pub label: &'static str,
	pub level: Level,
}

pub fn confidence_display(confidence: Confidence) -> ConfidenceDisplay {
	match confidence {
		Confidence::High => ConfidenceDisplay {
			emoji: "🟢",
			label: "Confiance élevée (3+ sources concordantes)",
			level: Level::Success,
		},
		Confidence::Medium => ConfidenceDisplay {
			emoji: "🟡",
			label: "Confiance moyenne (sources partielles)",
			level: Level::Warning,
		},
		Confidence::Low => ConfidenceDisplay {
			emoji: "🔴",
			label: "Confiance faible (peu de sources)",
			level: Level::Error,
		},
		Confidence::None => ConfidenceDisplay {
			emoji: "⚪",
			label: "Aucune source disponible",
			level: Level::Info,
		},
	}
}

pub fn format_source_metadata(document: &Document) -> String {
	format!(
		"{} > {} • Équipe {} • Mis à jour le {}",
		or_not_available(&document.product),
		or_not_available(&document.category),
		or_not_available(&document.team),
		document.last_updated,
	)
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
		None => text.to_string(),
	}
}

/// Heuristic for short or connective queries that likely continue the previous exchange.
pub fn is_follow_up_query(query: &str) -> bool {
	let normalized = query.trim().to_lowercase();

	if normalized.split_whitespace().count() <= 3 {
		return true;
	}

	FOLLOW_UP_PATTERNS.iter().any(|pattern| normalized.contains(pattern))
}

fn or_not_available(value: &str) -> &str {
	if value.trim().is_empty() { NOT_AVAILABLE } else { value }
}
