//! Basket handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::{debug, info};

use shopmock_fixtures::baskets::product_item;
use shopmock_types::{Basket, BasketItemRequest};

use crate::handlers::common::{bad_request, not_found, storage_error, ApiError};
use crate::state::AppState;

/// POST /baskets - Create a basket from the canned template
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/baskets",
    responses(
        (status = 201, description = "Basket created", body = Basket)
    ),
    tag = "baskets"
))]
pub async fn post_baskets(
	State(state): State<AppState>,
) -> Result<(StatusCode, Json<Basket>), ApiError> {
	let basket = state.basket_template.as_ref().clone().with_fresh_id();
	let basket = state
		.storage
		.create_basket(basket)
		.await
		.map_err(storage_error)?;

	info!("Created basket {}", basket.basket_id);
	Ok((StatusCode::CREATED, Json(basket)))
}

/// GET /baskets/:id - Fetch a stored basket
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/baskets/{basket_id}",
    params(("basket_id" = String, Path, description = "Basket id")),
    responses(
        (status = 200, description = "Basket", body = Basket),
        (status = 404, description = "Basket not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "baskets"
))]
pub async fn get_basket(
	State(state): State<AppState>,
	Path(basket_id): Path<String>,
) -> Result<Json<Basket>, ApiError> {
	debug!("Fetching basket {}", basket_id);

	let basket = state
		.storage
		.get_basket(&basket_id)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("basket", &basket_id))?;

	Ok(Json(basket))
}

/// POST /baskets/:id/items - Add a canned line item to a basket
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/baskets/{basket_id}/items",
    params(("basket_id" = String, Path, description = "Basket id")),
    request_body = BasketItemRequest,
    responses(
        (status = 200, description = "Updated basket", body = Basket),
        (status = 400, description = "Invalid item request", body = shopmock_types::models::ApiFault),
        (status = 404, description = "Basket or product not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "baskets"
))]
pub async fn post_basket_items(
	State(state): State<AppState>,
	Path(basket_id): Path<String>,
	Json(request): Json<BasketItemRequest>,
) -> Result<Json<Basket>, ApiError> {
	if let Err(e) = request.validate() {
		return Err(bad_request(
			"invalid-item",
			"Invalid Item Request",
			e.to_string(),
		));
	}

	let mut basket = state
		.storage
		.get_basket(&basket_id)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("basket", &basket_id))?;

	// Line pricing comes from the seeded product, not from the request
	let product = state
		.storage
		.get_product(&request.product_id)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("product", &request.product_id))?;

	basket.add_product_item(product_item(
		&product.id,
		&product.name,
		product.price,
		request.quantity,
	));

	let basket = state
		.storage
		.update_basket(basket)
		.await
		.map_err(storage_error)?;

	info!(
		"Added {} x{} to basket {}",
		request.product_id, request.quantity, basket_id
	);
	Ok(Json(basket))
}
