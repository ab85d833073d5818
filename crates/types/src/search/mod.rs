//! Product search payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::models::Image;

/// Product search response with hits, refinements, and sorting options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResult {
	pub limit: u32,
	pub hits: Vec<ProductSearchHit>,
	/// The inbound query, echoed back
	pub query: String,
	pub refinements: Vec<Refinement>,
	pub sorting_options: Vec<SortingOption>,
	pub selected_sorting_option: Option<String>,
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub selected_refinements: HashMap<String, String>,
	pub offset: u32,
	pub total: u32,
}

/// Single product hit in a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchHit {
	pub product_id: String,
	pub product_name: String,
	pub currency: String,
	pub price: f64,
	pub price_max: Option<f64>,
	pub orderable: bool,
	pub image: Option<Image>,
	/// Variant the hit stands in for, when the hit is a master
	pub represented_product: Option<ProductRef>,
}

/// Bare product reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
	pub id: String,
}

/// Facet offered for narrowing a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Refinement {
	pub attribute_id: String,
	pub label: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub values: Vec<RefinementValue>,
}

/// Single facet bucket with its hit count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RefinementValue {
	pub label: String,
	pub value: String,
	pub hit_count: u32,
}

/// Sort order offered on a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SortingOption {
	pub id: String,
	pub label: String,
}

impl ProductSearchResult {
	/// Clone this canned result windowed to the requested page, echoing the query
	pub fn page_for_query(&self, query: &str, limit: u32, offset: u32) -> Self {
		let hits: Vec<ProductSearchHit> = self
			.hits
			.iter()
			.skip(offset as usize)
			.take(limit as usize)
			.cloned()
			.collect();

		Self {
			limit,
			hits,
			query: query.to_string(),
			refinements: self.refinements.clone(),
			sorting_options: self.sorting_options.clone(),
			selected_sorting_option: self.selected_sorting_option.clone(),
			selected_refinements: self.selected_refinements.clone(),
			offset,
			total: self.hits.len() as u32,
		}
	}

	/// Look up a refinement by attribute id
	pub fn refinement(&self, attribute_id: &str) -> Option<&Refinement> {
		self.refinements
			.iter()
			.find(|r| r.attribute_id == attribute_id)
	}
}
