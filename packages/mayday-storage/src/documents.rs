use std::collections::HashSet;

use mayday_domain::Document;

use crate::source::{self, RecordSource};

#[derive(Clone, Debug, Default)]
pub struct DocumentStore {
	documents: Vec<Document>,
}
impl DocumentStore {
	/// Never fails. A missing or malformed source yields an empty store.
	pub fn load<S>(source: &S) -> Self
	where
		S: RecordSource<Document> + ?Sized,
	{
		Self::from_documents(source::load_or_empty(source, "documents"))
	}

	pub fn from_documents(documents: Vec<Document>) -> Self {
		let mut seen = HashSet::with_capacity(documents.len());

		for document in &documents {
			if !seen.insert(document.id.as_str()) {
				tracing::warn!(
					document_id = %document.id,
					"Duplicate document id. Lookups return the first occurrence."
				);
			}
		}

		Self { documents }
	}

	pub fn documents(&self) -> &[Document] {
		&self.documents
	}

	pub fn get_document_by_id(&self, id: &str) -> Option<&Document> {
		self.documents.iter().find(|document| document.id == id)
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}
}
