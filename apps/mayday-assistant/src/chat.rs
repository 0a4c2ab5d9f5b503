use std::io::{self, BufRead, Write};

use mayday_service::{Assistant, Session, display};
use mayday_storage::UserRoster;

use crate::render;

const HELP: &str = "Commandes : /reset, /user NOM, /stats, /help, /quit";

/// Line-based conversation loop. Ends on `/quit` or end of input.
pub fn run<R, W>(
	assistant: &Assistant,
	roster: &UserRoster,
	session: &mut Session,
	input: R,
	out: &mut W,
	snippet_chars: usize,
) -> io::Result<()>
where
	R: BufRead,
	W: Write,
{
	writeln!(out, "Bonjour {} ! {HELP}", session.user())?;

	for line in input.lines() {
		let line = line?;
		let line = line.trim();

		if line.is_empty() {
			continue;
		}

		match line.split_once(' ').map_or((line, ""), |(head, tail)| (head, tail.trim())) {
			("/quit", _) => break,
			("/help", _) => writeln!(out, "{HELP}")?,
			("/reset", _) => {
				session.reset();

				writeln!(out, "🔄 Nouvelle conversation.")?;
			},
			("/stats", _) => {
				writeln!(
					out,
					"📊 Utilisateur : {} | Queries : {} | Messages : {} | Documents accessibles : {}",
					session.user(),
					session.query_count(),
					session.turns().len(),
					assistant.count_accessible_documents(session.permissions()),
				)?;
			},
			("/user", "") => write_profiles(out, roster)?,
			("/user", name) if roster.get(name).is_none() => {
				writeln!(out, "Profil inconnu : {name}")?;
				write_profiles(out, roster)?;
			},
			("/user", name) => {
				if session.switch_user(name, roster) {
					writeln!(
						out,
						"👤 {} ({})",
						session.user(),
						session.permissions().teams.join(", ")
					)?;
				}
			},
			_ => {
				if display::is_follow_up_query(line) && !session.turns().is_empty() {
					tracing::debug!(query = %line, "Follow-up query detected.");
				}

				let response = session.ask(assistant, line);

				render::write_response(out, &response, snippet_chars)?;
			},
		}
	}

	Ok(())
}

fn write_profiles<W>(out: &mut W, roster: &UserRoster) -> io::Result<()>
where
	W: Write,
{
	let names = roster.names().collect::<Vec<_>>().join(", ");

	writeln!(out, "Profils disponibles : {names}")
}
