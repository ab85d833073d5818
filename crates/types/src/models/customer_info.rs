//! Customer reference embedded in baskets and orders

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Lightweight customer reference carried on baskets and orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
	pub customer_id: String,
	pub customer_no: Option<String>,
	pub email: String,
	/// True for anonymous shoppers that never authenticated
	#[serde(default)]
	pub guest: bool,
}

impl CustomerInfo {
	pub fn guest(customer_id: impl Into<String>) -> Self {
		Self {
			customer_id: customer_id.into(),
			customer_no: None,
			email: String::new(),
			guest: true,
		}
	}

	pub fn registered(
		customer_id: impl Into<String>,
		customer_no: impl Into<String>,
		email: impl Into<String>,
	) -> Self {
		Self {
			customer_id: customer_id.into(),
			customer_no: Some(customer_no.into()),
			email: email.into(),
			guest: false,
		}
	}
}
