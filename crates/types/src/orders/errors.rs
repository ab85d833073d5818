//! Error types for order operations

use thiserror::Error;

/// General order-related errors
#[derive(Error, Debug)]
pub enum OrderError {
	#[error("Order not found: {order_no}")]
	NotFound { order_no: String },

	#[error("Order {order_no} has no product items")]
	EmptyOrder { order_no: String },

	#[error("Order {order_no} total {actual} does not match item and shipping totals {expected}")]
	TotalMismatch {
		order_no: String,
		expected: f64,
		actual: f64,
	},

	#[error("Storage error: {0}")]
	Storage(String),
}
