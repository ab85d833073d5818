//! Error types for customer operations

use thiserror::Error;

/// General customer-related errors
#[derive(Error, Debug)]
pub enum CustomerError {
	#[error("Customer not found: {customer_id}")]
	NotFound { customer_id: String },

	#[error("Registered customer {customer_id} is missing login or email")]
	IncompleteProfile { customer_id: String },

	#[error("Storage error: {0}")]
	Storage(String),
}
