use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read data file at {path:?}.")]
	Read { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse data file at {path:?}: {source}")]
	Parse { path: PathBuf, source: serde_json::Error },
}
