//! Canned fault payload shared by all endpoints
//!
//! Mirrors the commerce platform's error body: a fault type URI, a short
//! title, and a human-readable detail line, plus optional per-fault
//! arguments (e.g. the offending id).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

const FAULT_TYPE_BASE: &str = "https://api.shopmock.example/errors";

/// Error payload returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ApiFault {
	/// Fault type URI, stable per error class
	#[serde(rename = "type")]
	pub fault_type: String,

	/// Short human-readable summary
	pub title: String,

	/// Detail line for this occurrence
	pub detail: String,

	/// Per-fault arguments (offending ids, field names)
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub arguments: HashMap<String, String>,
}

impl ApiFault {
	/// Create a fault with the given type slug, title, and detail
	pub fn new(slug: &str, title: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			fault_type: format!("{}/{}", FAULT_TYPE_BASE, slug),
			title: title.into(),
			detail: detail.into(),
			arguments: HashMap::new(),
		}
	}

	/// Attach a named argument to the fault
	pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.arguments.insert(key.into(), value.into());
		self
	}

	/// Standard not-found fault for an entity/id pair
	pub fn not_found(entity: &str, id: &str) -> Self {
		Self::new(
			"not-found",
			"Not Found",
			format!("No {} with id '{}' could be found.", entity, id),
		)
		.with_argument(format!("{}Id", entity), id)
	}
}
