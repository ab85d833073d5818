//! Product detail payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::models::Image;

pub mod errors;

pub use errors::ProductError;

/// Result type for product operations
pub type ProductResult<T> = Result<T, ProductError>;

/// Product detail as returned by the product endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
	pub id: String,
	pub name: String,
	pub page_title: Option<String>,
	pub short_description: String,
	pub long_description: Option<String>,
	pub brand: Option<String>,
	pub currency: String,
	pub price: f64,
	/// Upper bound of the variant price range on master products
	pub price_max: Option<f64>,
	pub primary_category_id: Option<String>,

	#[serde(rename = "type")]
	pub product_type: ProductType,

	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub image_groups: Vec<ImageGroup>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub variation_attributes: Vec<VariationAttribute>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub variants: Vec<Variant>,
	pub inventory: Option<Inventory>,
	pub master: Option<MasterInfo>,

	pub min_order_quantity: u32,
	pub step_quantity: u32,
}

/// Product kind flags, mirroring the platform's `type` object
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
	#[serde(default)]
	pub master: bool,
	#[serde(default)]
	pub variant: bool,
	#[serde(default)]
	pub item: bool,
}

impl ProductType {
	pub fn master() -> Self {
		Self {
			master: true,
			..Self::default()
		}
	}

	pub fn variant() -> Self {
		Self {
			variant: true,
			..Self::default()
		}
	}

	pub fn item() -> Self {
		Self {
			item: true,
			..Self::default()
		}
	}
}

/// Image set for one view type (large, medium, swatch)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImageGroup {
	pub view_type: String,
	pub images: Vec<Image>,
	/// Present when the group is specific to one variation value
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub variation_attributes: Vec<VariationAttribute>,
}

/// Purchasable configuration of a master product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Variant {
	pub product_id: String,
	pub orderable: bool,
	pub price: f64,
	pub variation_values: HashMap<String, String>,
}

/// Variation axis of a master product (color, size)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VariationAttribute {
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub values: Vec<VariationAttributeValue>,
}

/// Selectable value on a variation axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VariationAttributeValue {
	pub name: String,
	pub value: String,
	pub orderable: bool,
}

/// Inventory record attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
	pub id: String,
	/// Available to sell
	pub ats: u32,
	pub stock_level: u32,
	pub orderable: bool,
	#[serde(default)]
	pub backorderable: bool,
	#[serde(default)]
	pub preorderable: bool,
}

/// Master reference carried on variant products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MasterInfo {
	pub master_id: String,
	pub orderable: bool,
	pub price: f64,
}

impl Product {
	pub fn is_master(&self) -> bool {
		self.product_type.master
	}

	/// Variants that can currently be ordered
	pub fn orderable_variants(&self) -> Vec<&Variant> {
		self.variants.iter().filter(|v| v.orderable).collect()
	}

	/// Find the variant matching the given variation values exactly
	pub fn find_variant(&self, values: &HashMap<String, String>) -> Option<&Variant> {
		self.variants
			.iter()
			.find(|variant| &variant.variation_values == values)
	}

	/// Check the product holds together as a payload
	pub fn validate(&self) -> ProductResult<()> {
		if self.price < 0.0 {
			return Err(ProductError::NegativePrice {
				product_id: self.id.clone(),
			});
		}

		if let Some(inventory) = &self.inventory {
			if inventory.ats > inventory.stock_level {
				return Err(ProductError::InventoryInconsistent {
					product_id: self.id.clone(),
				});
			}
		}

		// Each variant's variation values must name a declared attribute
		for variant in &self.variants {
			for key in variant.variation_values.keys() {
				if !self.variation_attributes.iter().any(|attr| &attr.id == key) {
					return Err(ProductError::UnknownVariationAttribute {
						product_id: variant.product_id.clone(),
						attribute: key.clone(),
					});
				}
			}
		}

		Ok(())
	}
}

/// Envelope for batch product lookup (?ids=)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductsResult {
	pub limit: u32,
	pub data: Vec<Product>,
	pub total: u32,
}

impl ProductsResult {
	pub fn from_products(data: Vec<Product>) -> Self {
		let total = data.len() as u32;
		Self {
			limit: total,
			data,
			total,
		}
	}
}
