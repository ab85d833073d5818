//! Shopper token endpoint payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;

pub use errors::AuthError;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Default token lifetime handed out by the mock, in seconds
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 1800;

/// Grant types accepted by the token endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	ClientCredentials,
	RefreshToken,
	AuthorizationCodePkce,
	SessionBridge,
}

impl std::fmt::Display for GrantType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GrantType::ClientCredentials => write!(f, "client_credentials"),
			GrantType::RefreshToken => write!(f, "refresh_token"),
			GrantType::AuthorizationCodePkce => write!(f, "authorization_code_pkce"),
			GrantType::SessionBridge => write!(f, "session_bridge"),
		}
	}
}

/// Form body accepted by POST /auth/token
///
/// The token endpoint is the one surface that speaks OAuth-style
/// snake_case rather than the camelCase of the commerce payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TokenRequest {
	pub grant_type: GrantType,
	pub client_id: Option<String>,
	pub client_secret: Option<String>,
	pub refresh_token: Option<String>,
	pub usid: Option<String>,
	pub code_verifier: Option<String>,
}

impl TokenRequest {
	/// Check the request carries the parameters its grant type needs
	pub fn validate(&self) -> AuthResult<()> {
		match self.grant_type {
			GrantType::RefreshToken if self.refresh_token.is_none() => {
				Err(AuthError::MissingParameter {
					field: "refresh_token".to_string(),
				})
			},
			GrantType::AuthorizationCodePkce if self.code_verifier.is_none() => {
				Err(AuthError::MissingParameter {
					field: "code_verifier".to_string(),
				})
			},
			_ => Ok(()),
		}
	}
}

/// Token endpoint response, OAuth wire shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TokenResponse {
	pub access_token: String,
	pub refresh_token: String,
	pub expires_in: u64,
	pub token_type: String,
	/// Unique shopper id for this browser/device session
	pub usid: String,
	pub customer_id: String,
	pub enc_user_id: String,
	pub id_token: Option<String>,
}

impl TokenResponse {
	/// Mint a copy of this token with a fresh usid
	pub fn minted(&self) -> Self {
		let mut token = self.clone();
		token.usid = Uuid::new_v4().to_string();
		token
	}

	/// Mint a copy bound to an existing session, as refresh grants require
	pub fn minted_for_session(&self, usid: &str) -> Self {
		let mut token = self.clone();
		token.usid = usid.to_string();
		token
	}

	pub fn is_bearer(&self) -> bool {
		self.token_type.eq_ignore_ascii_case("bearer")
	}
}
