//! Error types for product operations

use thiserror::Error;

/// General product-related errors
#[derive(Error, Debug)]
pub enum ProductError {
	#[error("Product not found: {product_id}")]
	NotFound { product_id: String },

	#[error("Negative price on product {product_id}")]
	NegativePrice { product_id: String },

	#[error("Inventory for product {product_id} has ATS above stock level")]
	InventoryInconsistent { product_id: String },

	#[error("Variant {product_id} uses undeclared variation attribute '{attribute}'")]
	UnknownVariationAttribute {
		product_id: String,
		attribute: String,
	},

	#[error("Storage error: {0}")]
	Storage(String),
}
