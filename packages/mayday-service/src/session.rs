use mayday_domain::{ConversationTurn, UserPermissions};
use mayday_storage::UserRoster;

use crate::{Assistant, GeneratedResponse};

/// One user's conversation: an append-only log plus the permissions it runs under.
#[derive(Clone, Debug)]
pub struct Session {
	user: String,
	permissions: UserPermissions,
	turns: Vec<ConversationTurn>,
	query_count: u32,
}
impl Session {
	pub fn new(user: impl Into<String>, permissions: UserPermissions) -> Self {
		Self { user: user.into(), permissions, turns: Vec::new(), query_count: 0 }
	}

	pub fn for_user(user: &str, roster: &UserRoster) -> Self {
		Self::new(user, roster.get_user_permissions(user))
	}

	pub fn user(&self) -> &str {
		&self.user
	}

	pub fn permissions(&self) -> &UserPermissions {
		&self.permissions
	}

	pub fn turns(&self) -> &[ConversationTurn] {
		&self.turns
	}

	pub fn query_count(&self) -> u32 {
		self.query_count
	}

	/// Records the query, answers it against the log so far and records the answer.
	pub fn ask(&mut self, assistant: &Assistant, query: &str) -> GeneratedResponse {
		self.query_count += 1;

		self.turns.push(ConversationTurn::user(query));

		let response = assistant.generate_response(query, &self.permissions, &self.turns);

		self.turns.push(ConversationTurn::assistant(
			response.text.clone(),
			response.sources.clone(),
			response.confidence,
		));

		response
	}

	pub fn reset(&mut self) {
		self.turns.clear();

		self.query_count = 0;
	}

	/// Replaces the permissions wholesale and starts a fresh log. Returns `false` when `user`
	/// is already the active user.
	pub fn switch_user(&mut self, user: &str, roster: &UserRoster) -> bool {
		if user == self.user {
			return false;
		}

		tracing::info!(from = %self.user, to = %user, "Session user switched.");

		*self = Self::for_user(user, roster);

		true
	}
}
