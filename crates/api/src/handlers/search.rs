//! Product search handler

use axum::{
	extract::{Query, State},
	response::Json,
};
use serde::Deserialize;
use tracing::info;

use shopmock_types::ProductSearchResult;

use crate::handlers::common::{storage_error, ApiError};
use crate::pagination::PageQuery;
use crate::state::AppState;

/// Query parameters for product search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
	pub q: Option<String>,
	pub limit: Option<u32>,
	pub offset: Option<u32>,
}

/// GET /product-search - Canned hit list with the query echoed back
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/product-search",
    params(
        ("q" = Option<String>, Query, description = "Search phrase"),
        ("limit" = Option<u32>, Query, description = "Page size"),
        ("offset" = Option<u32>, Query, description = "Page offset")
    ),
    responses(
        (status = 200, description = "Search result", body = ProductSearchResult)
    ),
    tag = "search"
))]
pub async fn get_product_search(
	State(state): State<AppState>,
	Query(query): Query<SearchQuery>,
) -> Result<Json<ProductSearchResult>, ApiError> {
	let page = PageQuery {
		limit: query.limit,
		offset: query.offset,
	};
	let (limit, offset) = page.bounds();
	let phrase = query.q.as_deref().unwrap_or_default();

	let template = state
		.storage
		.search_template()
		.await
		.map_err(storage_error)?;
	let result = template.page_for_query(phrase, limit, offset);

	info!(
		"Search for '{}' returning {} of {} hit(s)",
		phrase,
		result.hits.len(),
		result.total
	);
	Ok(Json(result))
}
