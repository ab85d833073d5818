//! Error types for basket operations

use thiserror::Error;

/// Validation errors for basket payloads
#[derive(Error, Debug)]
pub enum BasketValidationError {
	#[error("Basket has no currency")]
	MissingCurrency,

	#[error("Invalid quantity for product {product_id}: must be at least 1")]
	InvalidQuantity { product_id: String },

	#[error("Negative price on product {product_id}")]
	NegativePrice { product_id: String },

	#[error("Negative total: {field}")]
	NegativeTotal { field: String },

	#[error("Order total {actual} does not match product and shipping totals {expected}")]
	TotalMismatch { expected: f64, actual: f64 },
}

/// General basket-related errors
#[derive(Error, Debug)]
pub enum BasketError {
	#[error("Basket validation failed: {0}")]
	Validation(#[from] BasketValidationError),

	#[error("Basket not found: {basket_id}")]
	NotFound { basket_id: String },

	#[error("Storage error: {0}")]
	Storage(String),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
