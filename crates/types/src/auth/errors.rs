//! Error types for token operations

use thiserror::Error;

/// Errors the token endpoint can answer with
#[derive(Error, Debug)]
pub enum AuthError {
	#[error("Unsupported grant type: {grant_type}")]
	UnsupportedGrantType { grant_type: String },

	#[error("Missing required parameter: {field}")]
	MissingParameter { field: String },

	#[error("Unknown client: {client_id}")]
	UnknownClient { client_id: String },

	#[error("Client secret rejected for client {client_id}")]
	InvalidClientSecret { client_id: String },

	#[error("Refresh token is not valid")]
	InvalidRefreshToken,
}
