use std::io::{self, Write};

use mayday_domain::Document;
use mayday_service::{
	Assistant, GeneratedResponse, QuestionCategory, ScoredDocument,
	display::{self, ConfidenceDisplay},
};
use mayday_storage::UserRoster;

pub fn write_response<W>(
	out: &mut W,
	response: &GeneratedResponse,
	snippet_chars: usize,
) -> io::Result<()>
where
	W: Write,
{
	let ConfidenceDisplay { emoji, label, .. } = display::confidence_display(response.confidence);

	writeln!(out, "{}", response.text)?;
	writeln!(out, "---")?;
	writeln!(out, "{emoji} {label}")?;

	if response.sources.is_empty() {
		return Ok(());
	}

	writeln!(out, "---")?;
	writeln!(out, "📚 Sources utilisées ({})", response.sources.len())?;

	for (idx, source) in response.sources.iter().enumerate() {
		write_source(out, idx + 1, source, snippet_chars)?;
	}

	Ok(())
}

pub fn write_hits<W>(
	out: &mut W,
	hits: &[ScoredDocument<'_>],
	snippet_chars: usize,
) -> io::Result<()>
where
	W: Write,
{
	if hits.is_empty() {
		writeln!(out, "Aucun document accessible ne correspond à cette recherche.")?;

		return Ok(());
	}

	for (idx, hit) in hits.iter().enumerate() {
		writeln!(out, "({:.2})", hit.score)?;
		write_source(out, idx + 1, hit.document, snippet_chars)?;
	}

	Ok(())
}

pub fn write_users<W>(out: &mut W, roster: &UserRoster, assistant: &Assistant) -> io::Result<()>
where
	W: Write,
{
	for profile in roster.profiles() {
		let permissions = &profile.permissions;

		writeln!(out, "👤 {}", profile.name)?;
		writeln!(out, "  - Équipes : {}", permissions.teams.join(", "))?;
		writeln!(out, "  - Rôle : {}", permissions.role)?;
		writeln!(
			out,
			"  - Documents accessibles : {}",
			assistant.count_accessible_documents(permissions)
		)?;
	}

	Ok(())
}

pub fn write_questions<W>(out: &mut W, categories: &[QuestionCategory]) -> io::Result<()>
where
	W: Write,
{
	for category in categories.iter().filter(|category| !category.questions.is_empty()) {
		writeln!(out, "{} :", category.name)?;

		for question in &category.questions {
			writeln!(out, "  - {question}")?;
		}
	}

	Ok(())
}

fn write_source<W>(
	out: &mut W,
	rank: usize,
	source: &Document,
	snippet_chars: usize,
) -> io::Result<()>
where
	W: Write,
{
	writeln!(out, "[Source {rank}] {}", source.title)?;
	writeln!(out, "  {}", display::format_source_metadata(source))?;
	writeln!(out, "  {}", display::truncate_text(&source.content, snippet_chars))
}
