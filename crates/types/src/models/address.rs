//! Postal address as it appears on baskets, orders, and customer profiles

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Billing or shipping address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Address {
	pub first_name: String,
	pub last_name: String,
	pub full_name: Option<String>,
	pub address1: String,
	pub address2: Option<String>,
	pub city: String,
	pub state_code: Option<String>,
	pub postal_code: String,
	pub country_code: String,
	pub phone: Option<String>,
}

impl Address {
	/// Display name in "First Last" form, falling back to the stored full name
	pub fn display_name(&self) -> String {
		match &self.full_name {
			Some(full) => full.clone(),
			None => format!("{} {}", self.first_name, self.last_name),
		}
	}
}
