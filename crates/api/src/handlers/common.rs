//! Fault mapping shared by handlers

use axum::{http::StatusCode, response::Json};
use shopmock_types::{models::ApiFault, StorageError};

/// Error shape every handler returns
pub type ApiError = (StatusCode, Json<ApiFault>);

pub fn not_found(entity: &str, id: &str) -> ApiError {
	(StatusCode::NOT_FOUND, Json(ApiFault::not_found(entity, id)))
}

pub fn bad_request(slug: &str, title: &str, detail: impl Into<String>) -> ApiError {
	(
		StatusCode::BAD_REQUEST,
		Json(ApiFault::new(slug, title, detail)),
	)
}

/// Map storage failures to the fault shape; NotFound keeps its identity
pub fn storage_error(err: StorageError) -> ApiError {
	match err {
		StorageError::NotFound { entity, id } => not_found(&entity, &id),
		StorageError::Backend(detail) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ApiFault::new("internal", "Internal Server Error", detail)),
		),
	}
}
