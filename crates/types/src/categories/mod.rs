//! Category tree payloads

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;

pub use errors::CategoryError;

/// Result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

/// Deepest subtree the category endpoint will return
pub const MAX_CATEGORY_LEVELS: u32 = 2;

/// Catalog category with nested subcategories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Category {
	pub id: String,
	pub name: String,
	pub page_title: Option<String>,
	pub page_description: Option<String>,
	pub parent_category_id: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub categories: Vec<Category>,
}

impl Category {
	/// Find a category by id anywhere in this subtree
	pub fn find(&self, id: &str) -> Option<&Category> {
		if self.id == id {
			return Some(self);
		}
		self.categories.iter().find_map(|child| child.find(id))
	}

	/// Depth of this subtree; a leaf has depth 0
	pub fn depth(&self) -> u32 {
		self.categories
			.iter()
			.map(|child| child.depth() + 1)
			.max()
			.unwrap_or(0)
	}

	/// Clone this subtree cut off below the given number of levels
	pub fn pruned_to_levels(&self, levels: u32) -> Category {
		let mut pruned = self.clone();
		if levels == 0 {
			pruned.categories = Vec::new();
		} else {
			pruned.categories = self
				.categories
				.iter()
				.map(|child| child.pruned_to_levels(levels - 1))
				.collect();
		}
		pruned
	}

	/// All ids in this subtree, depth-first
	pub fn flatten_ids(&self) -> Vec<&str> {
		let mut ids = vec![self.id.as_str()];
		for child in &self.categories {
			ids.extend(child.flatten_ids());
		}
		ids
	}

	/// Check parent links and id uniqueness across the subtree
	pub fn validate(&self) -> CategoryResult<()> {
		let mut seen = std::collections::HashSet::new();
		for id in self.flatten_ids() {
			if !seen.insert(id) {
				return Err(CategoryError::DuplicateId { id: id.to_string() });
			}
		}
		self.validate_parent_links()
	}

	fn validate_parent_links(&self) -> CategoryResult<()> {
		for child in &self.categories {
			if child.parent_category_id.as_deref() != Some(self.id.as_str()) {
				return Err(CategoryError::BrokenParentLink {
					id: child.id.clone(),
					expected_parent: self.id.clone(),
				});
			}
			child.validate_parent_links()?;
		}
		Ok(())
	}
}
