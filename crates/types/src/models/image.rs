//! Image reference used by products, search hits, and categories

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Image reference with alt text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Image {
	pub alt: String,
	pub link: String,
	pub title: Option<String>,
}

impl Image {
	pub fn new(alt: impl Into<String>, link: impl Into<String>) -> Self {
		let alt = alt.into();
		Self {
			title: Some(alt.clone()),
			alt,
			link: link.into(),
		}
	}
}
