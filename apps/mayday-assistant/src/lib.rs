pub mod chat;
pub mod render;

use std::{
	io::{self, Write},
	path::PathBuf,
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mayday_config::Config;
use mayday_service::{Assistant, Session};
use mayday_storage::UserRoster;

pub const GUEST_NAME: &str = "Invité";

#[derive(Debug, Parser)]
#[command(
	version = mayday_cli::VERSION,
	rename_all = "kebab",
	styles = mayday_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// List user profiles and what they can read.
	Users,
	/// Answer one question.
	Ask {
		#[arg(long, short = 'u', value_name = "NAME")]
		user: Option<String>,
		#[arg(long)]
		json: bool,
		#[arg(required = true, num_args = 1.., value_name = "QUERY")]
		query: Vec<String>,
	},
	/// Rank documents by keyword overlap.
	Search {
		#[arg(long, short = 'u', value_name = "NAME")]
		user: Option<String>,
		#[arg(long, short = 'k', value_name = "N")]
		top_k: Option<u32>,
		#[arg(long)]
		json: bool,
		#[arg(required = true, num_args = 1.., value_name = "QUERY")]
		query: Vec<String>,
	},
	/// Show suggested questions by category.
	Questions {
		#[arg(long)]
		json: bool,
	},
	/// Interactive conversation on stdin.
	Chat {
		#[arg(long, short = 'u', value_name = "NAME")]
		user: Option<String>,
	},
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = mayday_config::load(&args.config)?;

	init_tracing(&config);

	let assistant = Assistant::load(&config.data);
	let roster = mayday_service::load_roster(&config.data);
	let snippet_chars = config.display.snippet_chars as usize;
	let stdout = io::stdout();
	let mut out = stdout.lock();

	match args.command {
		Command::Users => render::write_users(&mut out, &roster, &assistant)?,
		Command::Ask { user, json, query } => {
			let user = resolve_user(user, &config, &roster);
			let permissions = roster.get_user_permissions(&user);
			let query = query.join(" ");
			let response = assistant.generate_response(&query, &permissions, &[]);

			if json {
				writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
			} else {
				render::write_response(&mut out, &response, snippet_chars)?;
			}
		},
		Command::Search { user, top_k, json, query } => {
			let user = resolve_user(user, &config, &roster);
			let permissions = roster.get_user_permissions(&user);
			let top_k = top_k.unwrap_or(config.retrieval.top_k) as usize;
			let query = query.join(" ");
			let hits = assistant.retrieve_documents(&query, &permissions, top_k);

			if json {
				writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
			} else {
				render::write_hits(&mut out, &hits, snippet_chars)?;
			}
		},
		Command::Questions { json } => {
			let categories = assistant.available_questions();

			if json {
				writeln!(out, "{}", serde_json::to_string_pretty(&categories)?)?;
			} else {
				render::write_questions(&mut out, &categories)?;
			}
		},
		Command::Chat { user } => {
			let user = resolve_user(user, &config, &roster);
			let mut session = Session::for_user(&user, &roster);
			let stdin = io::stdin();

			chat::run(&assistant, &roster, &mut session, stdin.lock(), &mut out, snippet_chars)?;
		},
	}

	Ok(())
}

/// Explicit `--user`, then the configured default, then the first roster entry.
pub fn resolve_user(explicit: Option<String>, config: &Config, roster: &UserRoster) -> String {
	explicit
		.or_else(|| config.session.as_ref().and_then(|session| session.default_user.clone()))
		.or_else(|| roster.names().next().map(str::to_string))
		.unwrap_or_else(|| GUEST_NAME.to_string())
}

fn init_tracing(config: &Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
