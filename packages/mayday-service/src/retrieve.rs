use std::cmp::Ordering;

use serde::Serialize;

use crate::Assistant;
use mayday_domain::{Document, UserPermissions, access, scoring};

pub const DEFAULT_TOP_K: usize = 5;

#[derive(Clone, Debug, Serialize)]
pub struct ScoredDocument<'a> {
	#[serde(flatten)]
	pub document: &'a Document,
	pub score: f64,
}

impl Assistant {
	/// Keyword search over the whole catalog, independent of response templates.
	///
	/// Returns at most `top_k` visible documents with a positive score, by non-increasing
	/// score. Equal scores keep catalog order.
	pub fn retrieve_documents(
		&self,
		query: &str,
		permissions: &UserPermissions,
		top_k: usize,
	) -> Vec<ScoredDocument<'_>> {
		let mut scored: Vec<ScoredDocument<'_>> = self
			.documents
			.documents()
			.iter()
			.filter_map(|document| {
				let score = scoring::keyword_score(query, document);

				(score > 0.0).then_some(ScoredDocument { document, score })
			})
			.filter(|candidate| access::is_document_visible(candidate.document, permissions))
			.collect();

		scored.sort_by(|a, b| cmp_f64_desc(a.score, b.score));
		scored.truncate(top_k);

		tracing::debug!(top_k, returned = scored.len(), "Documents retrieved.");

		scored
	}

	pub fn count_accessible_documents(&self, permissions: &UserPermissions) -> usize {
		self.documents
			.documents()
			.iter()
			.filter(|document| access::is_document_visible(document, permissions))
			.count()
	}
}

pub fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
