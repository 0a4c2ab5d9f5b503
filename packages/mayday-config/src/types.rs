use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub data: Data,
	#[serde(default)]
	pub retrieval: Retrieval,
	#[serde(default)]
	pub display: Display,
	pub session: Option<Session>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// Static data files. Relative paths are resolved against the config file's directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Data {
	pub documents: PathBuf,
	pub responses: PathBuf,
	pub users: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Retrieval {
	#[serde(default = "default_top_k")]
	pub top_k: u32,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self { top_k: default_top_k() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Display {
	#[serde(default = "default_snippet_chars")]
	pub snippet_chars: u32,
}
impl Default for Display {
	fn default() -> Self {
		Self { snippet_chars: default_snippet_chars() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
	pub default_user: Option<String>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_top_k() -> u32 {
	5
}

fn default_snippet_chars() -> u32 {
	250
}
