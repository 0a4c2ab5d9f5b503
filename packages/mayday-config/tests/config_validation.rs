use mayday_config::Error;
use mayday_testkit::{TempDataDir, sample_config_toml};

fn write_config(dir: &TempDataDir, payload: &str) -> std::path::PathBuf {
	dir.write("mayday.toml", payload).expect("Failed to write test config.")
}

fn sample_payload() -> String {
	sample_config_toml("documents.json", "responses.json", "users.json")
}

#[test]
fn loads_sample_config() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let path = write_config(&dir, &sample_payload());
	let cfg = mayday_config::load(&path).expect("Sample config must load.");

	assert_eq!(cfg.service.log_level, "warn");
	assert_eq!(cfg.retrieval.top_k, 5);
	assert_eq!(cfg.display.snippet_chars, 250);
	assert_eq!(
		cfg.session.and_then(|session| session.default_user).as_deref(),
		Some("Sophie (RH)")
	);
}

#[test]
fn resolves_relative_data_paths_against_config_dir() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let path = write_config(&dir, &sample_payload());
	let cfg = mayday_config::load(&path).expect("Sample config must load.");

	assert_eq!(cfg.data.documents, dir.path().join("documents.json"));
	assert_eq!(cfg.data.users, dir.path().join("users.json"));
}

#[test]
fn keeps_absolute_data_paths() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let absolute = dir.path().join("elsewhere").join("documents.json");
	let payload =
		sample_config_toml(&absolute.display().to_string(), "responses.json", "users.json");
	let path = write_config(&dir, &payload);
	let cfg = mayday_config::load(&path).expect("Config must load.");

	assert_eq!(cfg.data.documents, absolute);
}

#[test]
fn optional_sections_use_defaults() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let payload = "\
[service]

[data]
documents = \"d.json\"
responses = \"r.json\"
users = \"u.json\"
";
	let path = write_config(&dir, payload);
	let cfg = mayday_config::load(&path).expect("Minimal config must load.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.retrieval.top_k, 5);
	assert_eq!(cfg.display.snippet_chars, 250);
	assert!(cfg.session.is_none());
}

#[test]
fn blank_default_user_is_dropped() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let payload = sample_payload().replace("default_user = \"Sophie (RH)\"", "default_user = \"  \"");
	let path = write_config(&dir, &payload);
	let cfg = mayday_config::load(&path).expect("Config must load.");

	assert!(cfg.session.expect("Session section must be present.").default_user.is_none());
}

#[test]
fn rejects_zero_top_k() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let payload = sample_payload().replace("top_k = 5", "top_k = 0");
	let path = write_config(&dir, &payload);
	let err = mayday_config::load(&path).expect_err("Expected validation error.");

	assert!(err.to_string().contains("retrieval.top_k must be greater than zero."));
}

#[test]
fn rejects_zero_snippet_chars() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let payload = sample_payload().replace("snippet_chars = 250", "snippet_chars = 0");
	let path = write_config(&dir, &payload);
	let err = mayday_config::load(&path).expect_err("Expected validation error.");

	assert!(err.to_string().contains("display.snippet_chars must be greater than zero."));
}

#[test]
fn rejects_blank_log_level() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let payload = sample_payload().replace("log_level = \"warn\"", "log_level = \" \"");
	let path = write_config(&dir, &payload);
	let err = mayday_config::load(&path).expect_err("Expected validation error.");

	assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn rejects_empty_data_path() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let payload = sample_config_toml("", "responses.json", "users.json");
	let path = write_config(&dir, &payload);
	let err = mayday_config::load(&path).expect_err("Expected validation error.");

	assert_eq!(err.to_string(), "Invalid config: data.documents must be non-empty.");
}

#[test]
fn reports_missing_and_unparsable_files() {
	let dir = TempDataDir::new().expect("Failed to create temp dir.");
	let missing = mayday_config::load(&dir.path().join("absent.toml"))
		.expect_err("Expected read error.");
	let path = write_config(&dir, "[service\nlog_level = 1");
	let broken = mayday_config::load(&path).expect_err("Expected parse error.");

	assert!(matches!(missing, Error::ReadConfig { .. }));
	assert!(matches!(broken, Error::ParseConfig { .. }));
	assert!(missing.to_string().contains("absent.toml"));
	assert!(broken.to_string().starts_with("Failed to parse config file at"));
}
