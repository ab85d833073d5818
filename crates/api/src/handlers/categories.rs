//! Category tree handler

use axum::{
	extract::{Path, Query, State},
	response::Json,
};
use serde::Deserialize;
use tracing::debug;

use shopmock_types::categories::{Category, MAX_CATEGORY_LEVELS};

use crate::handlers::common::{not_found, storage_error, ApiError};
use crate::state::AppState;

/// Query parameters for category lookups
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
	/// Subtree depth to return; defaults to 1, capped at the platform max
	pub levels: Option<u32>,
}

/// GET /categories/:id - Canned category subtree pruned to the requested depth
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/categories/{category_id}",
    params(
        ("category_id" = String, Path, description = "Category id"),
        ("levels" = Option<u32>, Query, description = "Subtree depth (max 2)")
    ),
    responses(
        (status = 200, description = "Category subtree", body = Category),
        (status = 404, description = "Category not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "categories"
))]
pub async fn get_category(
	State(state): State<AppState>,
	Path(category_id): Path<String>,
	Query(query): Query<CategoryQuery>,
) -> Result<Json<Category>, ApiError> {
	let levels = query.levels.unwrap_or(1).min(MAX_CATEGORY_LEVELS);
	debug!("Fetching category {} to depth {}", category_id, levels);

	let category = state
		.storage
		.get_category(&category_id)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("category", &category_id))?;

	Ok(Json(category.pruned_to_levels(levels)))
}
