//! Order history handlers

use axum::{
	extract::{Path, Query, State},
	response::Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use shopmock_types::{Order, OrderSearchResult};

use crate::handlers::common::{bad_request, not_found, storage_error, ApiError};
use crate::state::AppState;

/// Query parameters for order history lookups
#[derive(Debug, Deserialize)]
pub struct OrderHistoryQuery {
	pub customer_id: Option<String>,
	pub limit: Option<u32>,
	pub offset: Option<u32>,
}

/// GET /orders - Canned order history for a customer
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/orders",
    params(
        ("customer_id" = String, Query, description = "Customer id"),
        ("limit" = Option<u32>, Query, description = "Page size"),
        ("offset" = Option<u32>, Query, description = "Page offset")
    ),
    responses(
        (status = 200, description = "Order history", body = OrderSearchResult),
        (status = 400, description = "Missing customer id", body = shopmock_types::models::ApiFault)
    ),
    tag = "orders"
))]
pub async fn get_orders(
	State(state): State<AppState>,
	Query(query): Query<OrderHistoryQuery>,
) -> Result<Json<OrderSearchResult>, ApiError> {
	let customer_id = query.customer_id.as_deref().unwrap_or_default();
	if customer_id.is_empty() {
		return Err(bad_request(
			"invalid-request",
			"Invalid Request",
			"The customer_id query parameter is required.",
		));
	}

	let page = crate::pagination::PageQuery {
		limit: query.limit,
		offset: query.offset,
	};
	let (limit, offset) = page.bounds();

	let orders = state
		.storage
		.list_orders_for_customer(customer_id)
		.await
		.map_err(storage_error)?;

	info!(
		"Returning {} order(s) for customer {}",
		orders.len(),
		customer_id
	);
	Ok(Json(OrderSearchResult::page(orders, limit, offset)))
}

/// GET /orders/:order_no - Single canned order
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/orders/{order_no}",
    params(("order_no" = String, Path, description = "Order number")),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 404, description = "Order not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "orders"
))]
pub async fn get_order(
	State(state): State<AppState>,
	Path(order_no): Path<String>,
) -> Result<Json<Order>, ApiError> {
	debug!("Fetching order {}", order_no);

	let order = state
		.storage
		.get_order(&order_no)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("order", &order_no))?;

	Ok(Json(order))
}
