//! Inbound payloads for basket endpoints

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{BasketValidationError, BasketValidationResult};

/// Body of POST /baskets/{id}/items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BasketItemRequest {
	pub product_id: String,
	#[serde(default = "default_quantity")]
	pub quantity: u32,
}

fn default_quantity() -> u32 {
	1
}

impl BasketItemRequest {
	pub fn validate(&self) -> BasketValidationResult<()> {
		if self.quantity == 0 {
			return Err(BasketValidationError::InvalidQuantity {
				product_id: self.product_id.clone(),
			});
		}
		Ok(())
	}
}
