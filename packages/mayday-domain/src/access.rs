use crate::{Document, UserPermissions};

/// Teams whose documents are readable by every user.
pub const PUBLIC_TEAMS: [&str; 3] = ["Self-Care", "Support", "Academy"];

pub fn is_public_team(team: &str) -> bool {
	PUBLIC_TEAMS.contains(&team)
}

pub fn is_document_visible(document: &Document, permissions: &UserPermissions) -> bool {
	is_public_team(document.team.as_str()) || permissions.is_member_of(document.team.as_str())
}

/// Gate for team-restricted responses.
///
/// Only explicit membership counts here. `PUBLIC_TEAMS` is not consulted, so a response that
/// requires `Support` is denied to a user outside `Support` even though that user can read
/// every `Support` document.
pub fn has_required_access<S>(permissions: &UserPermissions, required_teams: &[S]) -> bool
where
	S: AsRef<str>,
{
	if required_teams.is_empty() {
		return true;
	}

	required_teams.iter().any(|team| permissions.is_member_of(team.as_ref()))
}
