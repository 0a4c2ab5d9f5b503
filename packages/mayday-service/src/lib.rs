pub mod display;
pub mod generate;
pub mod questions;
pub mod retrieve;
pub mod session;

pub use generate::{GeneratedResponse, ResponseKind};
pub use questions::QuestionCategory;
pub use retrieve::{DEFAULT_TOP_K, ScoredDocument};
pub use session::Session;

use mayday_config::Data;
use mayday_storage::{DocumentStore, JsonFile, TemplateStore, UserRoster};

/// Read-only assistant core over an injected document and template catalog.
#[derive(Clone, Debug, Default)]
pub struct Assistant {
	pub documents: DocumentStore,
	pub templates: TemplateStore,
}
impl Assistant {
	pub fn new(documents: DocumentStore, templates: TemplateStore) -> Self {
		Self { documents, templates }
	}

	/// Loads the catalog from the configured JSON files. Unreadable files leave the matching
	/// store empty.
	pub fn load(data: &Data) -> Self {
		let documents = DocumentStore::load(&JsonFile::new(&data.documents));
		let templates = TemplateStore::load(&JsonFile::new(&data.responses));

		tracing::info!(
			documents = documents.len(),
			templates = templates.len(),
			"Assistant catalog loaded."
		);

		Self { documents, templates }
	}
}

pub fn load_roster(data: &Data) -> UserRoster {
	UserRoster::load(&JsonFile::new(&data.users))
}
