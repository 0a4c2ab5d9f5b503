mod error;

pub use error::{Error, Result};

use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::Serialize;
use tempfile::TempDir;
use time::Date;

use mayday_domain::{Confidence, Document, ResponseTemplate, UserPermissions};

pub const SAMPLE_DOCUMENTS_JSON: &str = include_str!("../../../data/documents.json");
pub const SAMPLE_RESPONSES_JSON: &str = include_str!("../../../data/responses.json");
pub const SAMPLE_USERS_JSON: &str = include_str!("../../../data/users.json");

const FIXTURE_DATE: Date = time::macros::date!(2024 - 01 - 15);

/// Scratch directory for data and config fixtures. Removed on drop.
pub struct TempDataDir {
	dir: TempDir,
}
impl TempDataDir {
	pub fn new() -> Result<Self> {
		let dir = tempfile::Builder::new().prefix("mayday_test_").tempdir()?;

		Ok(Self { dir })
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
		let path = self.path().join(name);

		fs::write(&path, contents)?;

		Ok(path)
	}

	pub fn write_json<T>(&self, name: &str, value: &T) -> Result<PathBuf>
	where
		T: Serialize + ?Sized,
	{
		let payload = serde_json::to_string_pretty(value)?;

		self.write(name, &payload)
	}

	/// Writes the shipped sample data plus a config pointing at it, and returns the config path.
	pub fn write_sample_config(&self) -> Result<PathBuf> {
		self.write("documents.json", SAMPLE_DOCUMENTS_JSON)?;
		self.write("responses.json", SAMPLE_RESPONSES_JSON)?;
		self.write("users.json", SAMPLE_USERS_JSON)?;

		let config = sample_config_toml("documents.json", "responses.json", "users.json");

		self.write("mayday.toml", &config)
	}
}
pub fn sample_config_toml(documents: &str, responses: &str, users: &str) -> String {
	format!(
		"\
[service]
log_level = \"warn\"

[data]
documents = \"{documents}\"
responses = \"{responses}\"
users     = \"{users}\"

[retrieval]
top_k = 5

[display]
snippet_chars = 250

[session]
default_user = \"Sophie (RH)\"
"
	)
}

pub fn sample_documents() -> Vec<Document> {
	serde_json::from_str(SAMPLE_DOCUMENTS_JSON).expect("Sample documents must parse.")
}

pub fn sample_templates() -> Vec<ResponseTemplate> {
	serde_json::from_str(SAMPLE_RESPONSES_JSON).expect("Sample responses must parse.")
}

pub fn document(id: &str, team: &str, title: &str, content: &str, keywords: &[&str]) -> Document {
	Document {
		id: id.to_string(),
		title: title.to_string(),
		content: content.to_string(),
		keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
		team: team.to_string(),
		category: "Fixtures".to_string(),
		product: "Testkit".to_string(),
		last_updated: FIXTURE_DATE,
	}
}

pub fn template(
	key: &str,
	query_patterns: &[&str],
	required_teams: &[&str],
	sources: &[&str],
	confidence: Confidence,
) -> ResponseTemplate {
	ResponseTemplate {
		key: key.to_string(),
		query_patterns: query_patterns.iter().map(|pattern| pattern.to_string()).collect(),
		required_teams: required_teams.iter().map(|team| team.to_string()).collect(),
		response: format!("Réponse {key}."),
		sources: sources.iter().map(|source| source.to_string()).collect(),
		confidence,
	}
}

pub fn permissions(teams: &[&str]) -> UserPermissions {
	UserPermissions::new(teams.iter().copied(), "conseiller")
}
