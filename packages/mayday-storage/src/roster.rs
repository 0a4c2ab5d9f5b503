use serde::{Deserialize, Serialize};

use mayday_domain::UserPermissions;

use crate::source::{self, RecordSource};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct UserProfile {
	pub name: String,
	#[serde(flatten)]
	pub permissions: UserPermissions,
}

/// Named user profiles, in declared order.
#[derive(Clone, Debug, Default)]
pub struct UserRoster {
	users: Vec<UserProfile>,
}
impl UserRoster {
	pub fn load<S>(source: &S) -> Self
	where
		S: RecordSource<UserProfile> + ?Sized,
	{
		Self::from_profiles(source::load_or_empty(source, "users"))
	}

	pub fn from_profiles(users: Vec<UserProfile>) -> Self {
		Self { users }
	}

	pub fn profiles(&self) -> &[UserProfile] {
		&self.users
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.users.iter().map(|profile| profile.name.as_str())
	}

	pub fn get(&self, name: &str) -> Option<&UserPermissions> {
		self.users.iter().find(|profile| profile.name == name).map(|profile| &profile.permissions)
	}

	/// Unknown names resolve to the guest profile.
	pub fn get_user_permissions(&self, name: &str) -> UserPermissions {
		self.get(name).cloned().unwrap_or_else(UserPermissions::guest)
	}

	pub fn is_empty(&self) -> bool {
		self.users.is_empty()
	}
}
