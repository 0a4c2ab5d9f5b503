use serde::{Deserialize, Serialize};

pub const GUEST_ROLE: &str = "guest";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct UserPermissions {
	#[serde(default)]
	pub teams: Vec<String>,
	pub role: String,
	/// Informational only. Visibility is always computed from `teams`.
	#[serde(default)]
	pub accessible_docs: u32,
}
impl UserPermissions {
	pub fn new<I, S>(teams: I, role: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			teams: teams.into_iter().map(Into::into).collect(),
			role: role.into(),
			accessible_docs: 0,
		}
	}

	pub fn guest() -> Self {
		Self { teams: Vec::new(), role: GUEST_ROLE.to_string(), accessible_docs: 0 }
	}

	pub fn is_member_of(&self, team: &str) -> bool {
		self.teams.iter().any(|candidate| candidate == team)
	}
}
