//! Customer profile and product list payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::baskets::PaymentInstrument;
use crate::models::Address;

pub mod errors;

pub use errors::CustomerError;

/// Result type for customer operations
pub type CustomerResult<T> = Result<T, CustomerError>;

/// How the shopper authenticated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
	Guest,
	Registered,
}

/// Customer profile as returned by the customer endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
	pub customer_id: String,
	pub customer_no: String,
	pub login: String,
	pub email: String,
	pub first_name: String,
	pub last_name: String,
	pub auth_type: AuthType,
	pub enabled: bool,
	pub creation_date: DateTime<Utc>,
	pub last_login_time: Option<DateTime<Utc>>,
	pub last_modified: Option<DateTime<Utc>>,
	pub phone_home: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub addresses: Vec<CustomerAddress>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub payment_instruments: Vec<PaymentInstrument>,
}

/// Saved address on a customer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
	pub address_id: String,
	#[serde(default)]
	pub preferred: bool,
	#[serde(flatten)]
	pub address: Address,
}

impl Customer {
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	pub fn is_registered(&self) -> bool {
		self.auth_type == AuthType::Registered
	}

	/// Preferred address, falling back to the first saved one
	pub fn preferred_address(&self) -> Option<&CustomerAddress> {
		self.addresses
			.iter()
			.find(|a| a.preferred)
			.or_else(|| self.addresses.first())
	}

	/// Check the profile holds together as a payload
	pub fn validate(&self) -> CustomerResult<()> {
		if self.is_registered() && (self.login.is_empty() || self.email.is_empty()) {
			return Err(CustomerError::IncompleteProfile {
				customer_id: self.customer_id.clone(),
			});
		}
		Ok(())
	}
}

/// Kind of customer product list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProductListType {
	WishList,
	GiftRegistry,
}

/// Customer product list (wish list, gift registry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerProductList {
	pub id: String,
	#[serde(rename = "type")]
	pub list_type: ProductListType,
	pub public: bool,
	pub creation_date: DateTime<Utc>,
	pub last_modified: DateTime<Utc>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub customer_product_list_items: Vec<CustomerProductListItem>,
}

/// Entry on a customer product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerProductListItem {
	pub id: String,
	pub product_id: String,
	pub priority: u32,
	pub public: bool,
	pub quantity: u32,
	pub purchased_quantity: u32,
	#[serde(rename = "type")]
	pub item_type: String,
}

/// Paged envelope for product list lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerProductListResult {
	pub limit: u32,
	pub data: Vec<CustomerProductList>,
	pub total: u32,
}

impl CustomerProductListResult {
	pub fn from_lists(data: Vec<CustomerProductList>) -> Self {
		let total = data.len() as u32;
		Self {
			limit: total,
			data,
			total,
		}
	}
}
