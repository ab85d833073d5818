//! Token endpoint handler

use axum::{extract::State, http::StatusCode, response::Json, Form};
use tracing::info;

use shopmock_fixtures::faults;
use shopmock_types::auth::{AuthError, TokenRequest, TokenResponse};
use shopmock_types::models::ApiFault;

use crate::handlers::common::ApiError;
use crate::state::AppState;

/// POST /auth/token - Mint a canned shopper token
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/auth/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token minted", body = TokenResponse),
        (status = 400, description = "Invalid token request", body = ApiFault)
    ),
    tag = "auth"
))]
pub async fn post_token(
	State(state): State<AppState>,
	Form(request): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
	let token = state.token_issuer.issue(&request).map_err(|e| match e {
		AuthError::UnsupportedGrantType { grant_type } => (
			StatusCode::BAD_REQUEST,
			Json(faults::unsupported_grant_type(&grant_type)),
		),
		AuthError::MissingParameter { field } => (
			StatusCode::BAD_REQUEST,
			Json(
				ApiFault::new(
					"invalid-request",
					"Invalid Request",
					format!("Missing required parameter: {}", field),
				)
				.with_argument("parameter", field),
			),
		),
		AuthError::UnknownClient { client_id } => (
			StatusCode::UNAUTHORIZED,
			Json(
				ApiFault::new("invalid-client", "Invalid Client", "Unknown client id.")
					.with_argument("clientId", client_id),
			),
		),
		AuthError::InvalidClientSecret { client_id } => (
			StatusCode::UNAUTHORIZED,
			Json(
				ApiFault::new(
					"invalid-client",
					"Invalid Client",
					"Client secret rejected.",
				)
				.with_argument("clientId", client_id),
			),
		),
		AuthError::InvalidRefreshToken => (
			StatusCode::BAD_REQUEST,
			Json(ApiFault::new(
				"invalid-grant",
				"Invalid Grant",
				"The refresh token is not valid.",
			)),
		),
	})?;

	info!(
		"Minted {} token for customer {}",
		request.grant_type, token.customer_id
	);
	Ok(Json(token))
}
