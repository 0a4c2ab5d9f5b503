use mayday_domain::{Confidence, ConversationTurn, UserPermissions};
use mayday_service::{Assistant, DEFAULT_TOP_K, ResponseKind, generate::NOT_RECOGNIZED_MESSAGE};
use mayday_storage::{DocumentStore, TemplateStore};
use mayday_testkit::{document, permissions, sample_documents, sample_templates, template};

fn sample_assistant() -> Assistant {
	Assistant::new(
		DocumentStore::from_documents(sample_documents()),
		TemplateStore::from_templates(sample_templates()),
	)
}

fn fixture_assistant() -> Assistant {
	let documents = vec![
		document("d1", "RH", "Congé parental", "Procédure de demande", &["congé", "parental"]),
		document("d2", "Finance", "Budget marketing", "Budget du trimestre", &["budget"]),
		document("d3", "Support", "Escalade ticket", "Escalade niveau 2", &["ticket"]),
		document("d4", "Academy", "Parcours CRM", "Budget formation", &["crm"]),
	];
	let templates = vec![
		template("budget", &["budget marketing"], &["Finance"], &["d2"], Confidence::High),
		template("budget_public", &["budget"], &[], &["d4"], Confidence::Medium),
		template(
			"conge",
			&["congé parental"],
			&["RH"],
			&["d1", "missing", "d3"],
			Confidence::High,
		),
		template("support_gate", &["escalade"], &["Support"], &["d3"], Confidence::High),
		template("mixed", &["synthèse"], &[], &["d1", "d2", "d3", "d4"], Confidence::Low),
	];

	Assistant::new(
		DocumentStore::from_documents(documents),
		TemplateStore::from_templates(templates),
	)
}

fn no_history() -> Vec<ConversationTurn> {
	Vec::new()
}

#[test]
fn gated_template_denied_returns_restricted_branch() {
	let assistant = fixture_assistant();
	let response = assistant.generate_response(
		"Quel est le budget marketing ?",
		&permissions(&["RH"]),
		&no_history(),
	);

	assert_eq!(response.confidence, Confidence::None);
	assert!(response.sources.is_empty());
	assert!(response.text.contains("Finance"));
	assert_eq!(
		response.kind,
		ResponseKind::Restricted {
			template_key: "budget".to_string(),
			required_team: "Finance".to_string(),
		}
	);
}

#[test]
fn restricted_branch_stops_the_scan() {
	let assistant = fixture_assistant();
	// "budget_public" would match too, but the earlier gated template ends the scan.
	let response =
		assistant.generate_response("budget marketing", &UserPermissions::guest(), &no_history());

	assert_eq!(response.kind.as_str(), "restricted");
}

#[test]
fn first_matching_template_wins() {
	let assistant = fixture_assistant();
	let finance = assistant.generate_response(
		"budget marketing",
		&permissions(&["Finance"]),
		&no_history(),
	);
	let other =
		assistant.generate_response("budget commercial", &permissions(&["RH"]), &no_history());

	assert_eq!(finance.kind, ResponseKind::Matched { template_key: "budget".to_string() });
	assert_eq!(finance.confidence, Confidence::High);
	assert_eq!(other.kind, ResponseKind::Matched { template_key: "budget_public".to_string() });
	assert_eq!(other.text, "Réponse budget_public.");
}

#[test]
fn unknown_query_falls_back() {
	let assistant = fixture_assistant();
	let response =
		assistant.generate_response("xyz123nonsense", &permissions(&["RH"]), &no_history());

	assert_eq!(response.kind, ResponseKind::NotRecognized);
	assert_eq!(response.confidence, Confidence::Low);
	assert!(response.sources.is_empty());
	assert_eq!(response.text, NOT_RECOGNIZED_MESSAGE);
}

#[test]
fn matching_ignores_case_and_surrounding_whitespace() {
	let assistant = fixture_assistant();
	let response = assistant.generate_response(
		"   COMMENT demander un CONGÉ PARENTAL ?  ",
		&permissions(&["RH"]),
		&no_history(),
	);

	assert_eq!(response.kind, ResponseKind::Matched { template_key: "conge".to_string() });
}

#[test]
fn sources_skip_missing_ids_and_keep_order() {
	let assistant = fixture_assistant();
	let response =
		assistant.generate_response("congé parental", &permissions(&["RH"]), &no_history());
	let ids: Vec<&str> = response.sources.iter().map(|doc| doc.id.as_str()).collect();

	assert_eq!(ids, ["d1", "d3"]);
}

#[test]
fn sources_are_filtered_by_document_visibility() {
	let assistant = fixture_assistant();
	let response =
		assistant.generate_response("synthèse", &permissions(&["Finance"]), &no_history());
	let ids: Vec<&str> = response.sources.iter().map(|doc| doc.id.as_str()).collect();

	assert_eq!(ids, ["d2", "d3", "d4"]);
	assert_eq!(response.confidence, Confidence::Low);
}

// Intentional asymmetry: Support documents are public, a Support-gated answer is not.
#[test]
fn public_team_gate_still_requires_membership() {
	let assistant = fixture_assistant();
	let guest = UserPermissions::guest();
	let response = assistant.generate_response("escalade", &guest, &no_history());
	let visible = assistant.retrieve_documents("escalade", &guest, DEFAULT_TOP_K);

	assert_eq!(response.kind.as_str(), "restricted");
	assert_eq!(visible.first().map(|hit| hit.document.id.as_str()), Some("d3"));
}

#[test]
fn history_does_not_change_the_answer() {
	let assistant = fixture_assistant();
	let rh = permissions(&["RH"]);
	let history = vec![
		ConversationTurn::user("budget marketing"),
		ConversationTurn::assistant("Accès restreint", Vec::new(), Confidence::None),
	];

	assert_eq!(
		assistant.generate_response("congé parental", &rh, &history),
		assistant.generate_response("congé parental", &rh, &no_history())
	);
}

#[test]
fn empty_template_store_reports_unavailable() {
	let assistant = Assistant::new(
		DocumentStore::from_documents(sample_documents()),
		TemplateStore::default(),
	);
	let response = assistant.generate_response("congé parental", &permissions(&["RH"]), &[]);

	assert_eq!(response.kind, ResponseKind::Unavailable);
	assert_eq!(response.confidence, Confidence::None);
	assert!(response.sources.is_empty());
}

#[test]
fn retrieval_respects_top_k_and_ordering() {
	let assistant = sample_assistant();
	let admin = permissions(&["RH", "Finance", "Legal", "IT", "Support", "Self-Care", "Academy"]);

	for top_k in [0, 1, 2, 5, 50] {
		let hits = assistant.retrieve_documents("ticket budget formation frais", &admin, top_k);

		assert!(hits.len() <= top_k);
		assert!(hits.windows(2).all(|pair| pair[0].score >= pair[1].score));
		assert!(hits.iter().all(|hit| hit.score > 0.0 && hit.score <= 1.0));
	}
}

#[test]
fn retrieval_excludes_invisible_documents() {
	let assistant = sample_assistant();
	let sophie = assistant.retrieve_documents("congé parental", &permissions(&["RH"]), 5);
	let marc = assistant.retrieve_documents("congé parental", &permissions(&["Finance"]), 5);

	assert_eq!(sophie.first().map(|hit| hit.document.id.as_str()), Some("rh-002"));
	assert!(sophie[0].score > 0.0);
	assert!(marc.iter().all(|hit| hit.document.id != "rh-002"));
}

#[test]
fn retrieval_returns_nothing_without_shared_words() {
	let assistant = sample_assistant();

	assert!(assistant.retrieve_documents("xyz123nonsense", &permissions(&["RH"]), 5).is_empty());
}

#[test]
fn counts_accessible_documents() {
	let assistant = sample_assistant();
	let admin = permissions(&["RH", "Finance", "Legal", "IT", "Support", "Self-Care", "Academy"]);

	assert_eq!(assistant.count_accessible_documents(&UserPermissions::guest()), 6);
	assert_eq!(assistant.count_accessible_documents(&permissions(&["RH"])), 12);
	assert_eq!(assistant.count_accessible_documents(&permissions(&["Finance"])), 9);
	assert_eq!(assistant.count_accessible_documents(&admin), assistant.documents.len());
}

#[test]
fn sample_catalog_answers_hr_questions_for_hr() {
	let assistant = sample_assistant();
	let sophie = permissions(&["RH"]);
	let leave = assistant.generate_response(
		"Comment gérer une demande de congé parental ?",
		&sophie,
		&no_history(),
	);
	let refund = assistant.generate_response(
		"Quelle est la politique de remboursement ?",
		&sophie,
		&no_history(),
	);
	let refund_ids: Vec<&str> = refund.sources.iter().map(|doc| doc.id.as_str()).collect();

	assert_eq!(leave.kind, ResponseKind::Matched { template_key: "conge_parental".to_string() });
	assert_eq!(leave.confidence, Confidence::High);
	// fin-003 is cited by the template but belongs to Finance.
	assert_eq!(refund_ids, ["rh-001"]);
}

#[test]
fn sample_catalog_restricts_hr_questions_for_finance() {
	let assistant = sample_assistant();
	let response = assistant.generate_response(
		"Quelle est la politique de remboursement ?",
		&permissions(&["Finance"]),
		&no_history(),
	);

	assert_eq!(response.confidence, Confidence::None);
	assert!(response.text.contains("l'équipe RH"));
}

#[test]
fn sample_catalog_skips_broken_source_reference() {
	let assistant = sample_assistant();
	let response = assistant.generate_response(
		"Comment créer un ticket support ?",
		&UserPermissions::guest(),
		&no_history(),
	);
	let ids: Vec<&str> = response.sources.iter().map(|doc| doc.id.as_str()).collect();

	assert_eq!(ids, ["sup-003"]);
}

#[test]
fn sample_catalog_lists_questions_by_category() {
	let assistant = sample_assistant();
	let categories = assistant.available_questions();
	let names: Vec<&str> = categories.iter().map(|category| category.name).collect();

	assert_eq!(names, ["RH", "Finance", "Support", "Self-Care", "Academy"]);
	assert_eq!(
		categories[0].questions.first().map(String::as_str),
		Some("Politique de remboursement")
	);
	assert!(categories[0].questions.iter().any(|question| question == "Note de frais"));
	assert_eq!(categories[1].questions, ["Budget marketing", "Valider une dépense"]);
	assert_eq!(categories[2].questions, ["Escalader un ticket", "Sla", "Créer un ticket"]);
	assert_eq!(categories[4].questions, ["Formation crm"]);
}
