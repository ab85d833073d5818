//! Customer profile and product list handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use shopmock_fixtures::faults;
use shopmock_types::{Customer, CustomerProductListResult};

use crate::handlers::common::{not_found, storage_error, ApiError};
use crate::state::AppState;

/// GET /customers/:id - Canned customer profile
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}",
    params(("customer_id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer profile", body = Customer),
        (status = 404, description = "Customer not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "customers"
))]
pub async fn get_customer(
	State(state): State<AppState>,
	Path(customer_id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
	debug!("Fetching customer {}", customer_id);

	let customer = state
		.storage
		.get_customer(&customer_id)
		.await
		.map_err(storage_error)?
		.ok_or_else(|| not_found("customer", &customer_id))?;

	Ok(Json(customer))
}

/// GET /customers/:id/product-lists - Canned wish lists
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}/product-lists",
    params(("customer_id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Product lists", body = CustomerProductListResult),
        (status = 404, description = "Customer not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "customers"
))]
pub async fn get_customer_product_lists(
	State(state): State<AppState>,
	Path(customer_id): Path<String>,
) -> Result<Json<CustomerProductListResult>, ApiError> {
	// Unknown customers 404 rather than answering with an empty envelope
	if state
		.storage
		.get_customer(&customer_id)
		.await
		.map_err(storage_error)?
		.is_none()
	{
		return Err(not_found("customer", &customer_id));
	}

	let lists = state
		.storage
		.list_product_lists(&customer_id)
		.await
		.map_err(storage_error)?;

	Ok(Json(CustomerProductListResult::from_lists(lists)))
}

/// Body of PUT /customers/:id/password
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
	pub current_password: String,
	pub new_password: String,
}

/// PUT /customers/:id/password - Always answers the canned failure
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/api/v1/customers/{customer_id}/password",
    params(("customer_id" = String, Path, description = "Customer id")),
    responses(
        (status = 400, description = "Canned password update failure", body = shopmock_types::models::ApiFault),
        (status = 404, description = "Customer not found", body = shopmock_types::models::ApiFault)
    ),
    tag = "customers"
))]
pub async fn put_customer_password(
	State(state): State<AppState>,
	Path(customer_id): Path<String>,
	Json(_request): Json<PasswordChangeRequest>,
) -> Result<Json<Customer>, ApiError> {
	if state
		.storage
		.get_customer(&customer_id)
		.await
		.map_err(storage_error)?
		.is_none()
	{
		return Err(not_found("customer", &customer_id));
	}

	info!("Answering canned password failure for {}", customer_id);
	Err((
		StatusCode::BAD_REQUEST,
		Json(faults::password_update_failure()),
	))
}
