//! Product detail handlers

use axum::{
	extract::{Path, Query, State},
	response::Json,
};
use serde::Deserialize;
use tracing::debug;

use shopmock_types::{Product, ProductsResult};

use crate::handlers::common::{bad_request, not_found, storage_error, ApiError};
use crate::state::AppState;

/// Query parameters for batch product lookup
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
	/// Comma-separated product ids
	pub ids: Option<String>,
}

/// GET /products/:id - Canned product detail
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    params(("product_id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail", body = Product),
        (status = 404, description = "Product not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "products"
))]
pub async fn get_product(
	State(state): State<AppState>,
	Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
	debug!("Fetching product {}", product_id);

	let product = state
		.storage
		.get_product(&product_id)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("product", &product_id))?;

	Ok(Json(product))
}

/// GET /products?ids=a,b,c - Batch product lookup; unknown ids are skipped
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/products",
    params(("ids" = String, Query, description = "Comma-separated product ids")),
    responses(
        (status = 200, description = "Products", body = ProductsResult),
        (status = 400, description = "Missing ids", body = shopmock_types::models::ApiFault)
    ),
    tag = "products"
))]
pub async fn get_products(
	State(state): State<AppState>,
	Query(query): Query<ProductsQuery>,
) -> Result<Json<ProductsResult>, ApiError> {
	let ids: Vec<String> = query
		.ids
		.as_deref()
		.unwrap_or_default()
		.split(',')
		.map(str::trim)
		.filter(|id| !id.is_empty())
		.map(str::to_string)
		.collect();

	if ids.is_empty() {
		return Err(bad_request(
			"invalid-request",
			"Invalid Request",
			"The ids query parameter is required.",
		));
	}

	let products = state
		.storage
		.list_products(&ids)
		.await
		.map_err(storage_error)?;

	Ok(Json(ProductsResult::from_products(products)))
}
