use serde::Serialize;

use crate::Assistant;
use mayday_domain::{
	Confidence, ConversationTurn, Document, ResponseTemplate, UserPermissions, access,
	template::normalize_query,
};

pub const UNAVAILABLE_MESSAGE: &str =
	"Erreur : impossible de charger les réponses. Veuillez réessayer.";
pub const NOT_RECOGNIZED_MESSAGE: &str = "\
❓ **Question non reconnue**

Je n'ai pas trouvé de réponse exacte à votre question dans ma base de connaissances.

**Voici ce que je peux faire :**
- Reformuler votre question avec d'autres termes
- Explorer les sujets disponibles ci-dessous

**💡 Questions suggérées :**

**RH :**
- \"Quelle est la politique de remboursement ?\"
- \"Comment gérer une demande de congé parental ?\"
- \"Procédure d'onboarding nouveau salarié\"
- \"Politique de télétravail\"

**Finance :**
- \"Quel est le budget marketing Q1 ?\"
- \"Comment valider une dépense supérieure à 10 000 € ?\"
- \"Procédure de remboursement des frais\"

**Support :**
- \"Comment escalader un ticket prioritaire ?\"
- \"Quels sont les SLA par type de ticket ?\"
- \"Comment créer un ticket support ?\"

**Self-Care :**
- \"Mon produit ne s'allume pas, que faire ?\"
- \"Comment réinitialiser mon mot de passe ?\"

**Astuce :** essayez des mots-clés propres à votre domaine !
";

/// Which branch of the matcher produced a response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseKind {
	Matched { template_key: String },
	Restricted { template_key: String, required_team: String },
	NotRecognized,
	Unavailable,
}
impl ResponseKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Matched { .. } => "matched",
			Self::Restricted { .. } => "restricted",
			Self::NotRecognized => "not_recognized",
			Self::Unavailable => "unavailable",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedResponse {
	pub text: String,
	pub sources: Vec<Document>,
	pub confidence: Confidence,
	pub kind: ResponseKind,
}
impl GeneratedResponse {
	fn fixed(text: &str, confidence: Confidence, kind: ResponseKind) -> Self {
		Self { text: text.to_string(), sources: Vec::new(), confidence, kind }
	}
}

pub fn restricted_message<S>(required_teams: &[S]) -> String
where
	S: AsRef<str>,
{
	let team_list =
		required_teams.iter().map(|team| team.as_ref()).collect::<Vec<_>>().join(", ");
	let first_team = required_teams.first().map(|team| team.as_ref()).unwrap_or_default();

	format!(
		"🔒 **Accès restreint**\n\n\
		Je n'ai pas accès à des informations sur ce sujet dans vos documents disponibles.\n\n\
		Pour cette question, vous devez avoir accès à l'équipe : **{team_list}**\n\n\
		Contactez votre manager ou l'équipe {first_team} pour plus d'informations."
	)
}

impl Assistant {
	/// Answers `query` with the first template, in store order, whose pattern occurs in it.
	///
	/// A gated template that the caller cannot access ends the scan with a restricted-access
	/// answer; later templates are not considered. Sources of a granted template are filtered
	/// through document visibility, independently of the template gate. `_history` is not used
	/// for matching.
	pub fn generate_response(
		&self,
		query: &str,
		permissions: &UserPermissions,
		_history: &[ConversationTurn],
	) -> GeneratedResponse {
		if self.templates.is_empty() {
			tracing::warn!("No response templates loaded.");

			return GeneratedResponse::fixed(
				UNAVAILABLE_MESSAGE,
				Confidence::None,
				ResponseKind::Unavailable,
			);
		}

		let normalized = normalize_query(query);
		let Some(template) =
			self.templates.templates().iter().find(|template| template.matches(&normalized))
		else {
			tracing::debug!(branch = "not_recognized", "No response template matched.");

			return GeneratedResponse::fixed(
				NOT_RECOGNIZED_MESSAGE,
				Confidence::Low,
				ResponseKind::NotRecognized,
			);
		};

		if !access::has_required_access(permissions, &template.required_teams) {
			let required_team = template.required_teams.first().cloned().unwrap_or_default();

			tracing::debug!(
				branch = "restricted",
				template_key = %template.key,
				required_team = %required_team,
				"Response template denied."
			);

			return GeneratedResponse {
				text: restricted_message(&template.required_teams),
				sources: Vec::new(),
				confidence: Confidence::None,
				kind: ResponseKind::Restricted { template_key: template.key.clone(), required_team },
			};
		}

		let sources = self.resolve_visible_sources(template, permissions);

		tracing::debug!(
			branch = "matched",
			template_key = %template.key,
			sources = sources.len(),
			"Response template matched."
		);

		GeneratedResponse {
			text: template.response.clone(),
			sources,
			confidence: template.confidence,
			kind: ResponseKind::Matched { template_key: template.key.clone() },
		}
	}

	fn resolve_visible_sources(
		&self,
		template: &ResponseTemplate,
		permissions: &UserPermissions,
	) -> Vec<Document> {
		let mut sources = Vec::with_capacity(template.sources.len());

		for id in &template.sources {
			let Some(document) = self.documents.get_document_by_id(id) else {
				tracing::debug!(
					template_key = %template.key,
					document_id = %id,
					"Template source not found. Skipping."
				);

				continue;
			};

			if access::is_document_visible(document, permissions) {
				sources.push(document.clone());
			}
		}

		sources
	}
}
