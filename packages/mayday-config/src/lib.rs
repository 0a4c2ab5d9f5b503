mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Data, Display, Retrieval, Service, Session};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	for (label, path) in [
		("data.documents", &cfg.data.documents),
		("data.responses", &cfg.data.responses),
		("data.users", &cfg.data.users),
	] {
		if path.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.retrieval.top_k == 0 {
		return Err(Error::Validation {
			message: "retrieval.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.display.snippet_chars == 0 {
		return Err(Error::Validation {
			message: "display.snippet_chars must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: Option<&Path>) {
	if let Some(base_dir) = base_dir {
		for path in [&mut cfg.data.documents, &mut cfg.data.responses, &mut cfg.data.users] {
			if !path.as_os_str().is_empty() && path.is_relative() {
				*path = base_dir.join(&*path);
			}
		}
	}
	if let Some(session) = cfg.session.as_mut()
		&& session.default_user.as_deref().map(|user| user.trim().is_empty()).unwrap_or(false)
	{
		session.default_user = None;
	}
}
