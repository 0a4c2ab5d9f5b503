use std::collections::HashSet;

use crate::Document;

pub const KEYWORD_BONUS_WEIGHT: f64 = 0.3;

/// Lower-cases `text` and splits it on whitespace into a set of words.
pub fn word_set(text: &str) -> HashSet<String> {
	text.split_whitespace().map(str::to_lowercase).collect()
}

pub fn keyword_set(document: &Document) -> HashSet<String> {
	document.keywords.iter().map(|keyword| keyword.to_lowercase()).collect()
}

/// Relevance of `document` for `query`, in `[0, 1]`.
///
/// The base score is the share of distinct query words found among the document's keywords,
/// title words and content words. Query words that are also keywords add a bonus of
/// `0.3 * matched_keywords / total_keywords`. The sum is capped at 1.
pub fn keyword_score(query: &str, document: &Document) -> f64 {
	let query_words = word_set(query);
	let keywords = keyword_set(document);
	let mut terms = keywords.clone();

	terms.extend(word_set(&document.title));
	terms.extend(word_set(&document.content));

	if terms.is_empty() {
		return 0.0;
	}

	let common = query_words.intersection(&terms).count();

	if common == 0 {
		return 0.0;
	}

	let mut score = common as f64 / query_words.len() as f64;
	let keyword_overlap = query_words.intersection(&keywords).count();

	if keyword_overlap > 0 {
		score += KEYWORD_BONUS_WEIGHT * (keyword_overlap as f64 / keywords.len() as f64);
	}

	score.min(1.0)
}
