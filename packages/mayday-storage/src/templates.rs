use std::collections::HashSet;

use mayday_domain::ResponseTemplate;

use crate::source::{self, RecordSource};

/// Response templates in scan order.
///
/// The order of the source is kept as is: the matcher returns the first template whose
/// pattern matches, so reordering the source changes which answer wins.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore {
	templates: Vec<ResponseTemplate>,
}
impl TemplateStore {
	/// Never fails. A missing or malformed source yields an empty store.
	pub fn load<S>(source: &S) -> Self
	where
		S: RecordSource<ResponseTemplate> + ?Sized,
	{
		Self::from_templates(source::load_or_empty(source, "responses"))
	}

	pub fn from_templates(templates: Vec<ResponseTemplate>) -> Self {
		let mut seen = HashSet::with_capacity(templates.len());

		for template in &templates {
			if !seen.insert(template.key.as_str()) {
				tracing::warn!(template_key = %template.key, "Duplicate response template key.");
			}
			if template.query_patterns.is_empty() {
				tracing::warn!(
					template_key = %template.key,
					"Response template has no query pattern and can never match."
				);
			}
		}

		Self { templates }
	}

	pub fn templates(&self) -> &[ResponseTemplate] {
		&self.templates
	}

	pub fn get(&self, key: &str) -> Option<&ResponseTemplate> {
		self.templates.iter().find(|template| template.key == key)
	}

	pub fn len(&self) -> usize {
		self.templates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}
