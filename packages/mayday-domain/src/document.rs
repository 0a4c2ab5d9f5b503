use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Document {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub keywords: Vec<String>,
	#[serde(default)]
	pub team: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub product: String,
	#[serde(with = "crate::date_serde")]
	pub last_updated: Date,
}
