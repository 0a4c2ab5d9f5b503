use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Anything that can yield a batch of static records.
pub trait RecordSource<T> {
	fn describe(&self) -> String;

	fn load(&self) -> Result<Vec<T>>;
}

/// A JSON file holding a top-level array of records. Records that do not decode are skipped.
#[derive(Clone, Debug)]
pub struct JsonFile {
	path: PathBuf,
}
impl JsonFile {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}
impl<T> RecordSource<T> for JsonFile
where
	T: DeserializeOwned,
{
	fn describe(&self) -> String {
		self.path.display().to_string()
	}

	fn load(&self) -> Result<Vec<T>> {
		let raw = fs::read_to_string(&self.path)
			.map_err(|err| Error::Read { path: self.path.clone(), source: err })?;

		let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
			.map_err(|err| Error::Parse { path: self.path.clone(), source: err })?;

		Ok(records
			.into_iter()
			.enumerate()
			.filter_map(|(index, record)| match serde_json::from_value(record) {
				Ok(record) => Some(record),
				Err(err) => {
					tracing::warn!(
						error = %err,
						path = %self.path.display(),
						index,
						"Malformed record. Skipping."
					);

					None
				},
			})
			.collect())
	}
}

impl<T> RecordSource<T> for Vec<T>
where
	T: Clone,
{
	fn describe(&self) -> String {
		format!("in-memory ({} records)", self.len())
	}

	fn load(&self) -> Result<Vec<T>> {
		Ok(self.clone())
	}
}

/// Loads every record from `source`, or logs the failure and returns nothing.
pub fn load_or_empty<T, S>(source: &S, kind: &str) -> Vec<T>
where
	S: RecordSource<T> + ?Sized,
{
	match source.load() {
		Ok(records) => {
			tracing::debug!(
				kind,
				source = %source.describe(),
				count = records.len(),
				"Data loaded."
			);

			records
		},
		Err(err) => {
			tracing::error!(
				error = %err,
				kind,
				source = %source.describe(),
				"Data source unavailable. Continuing with no records."
			);

			Vec::new()
		},
	}
}
