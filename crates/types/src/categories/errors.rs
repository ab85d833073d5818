//! Error types for category operations

use thiserror::Error;

/// General category-related errors
#[derive(Error, Debug)]
pub enum CategoryError {
	#[error("Category not found: {category_id}")]
	NotFound { category_id: String },

	#[error("Duplicate category id in tree: {id}")]
	DuplicateId { id: String },

	#[error("Category {id} does not point back to parent {expected_parent}")]
	BrokenParentLink { id: String, expected_parent: String },

	#[error("Storage error: {0}")]
	Storage(String),
}
