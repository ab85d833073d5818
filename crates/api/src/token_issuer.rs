//! Template-based shopper token minting
//!
//! The issuer holds the canned token fixture and stamps per-request
//! identifiers onto copies of it. No real cryptography: the access token
//! is an opaque mock string the server never verifies.

use shopmock_types::auth::{AuthError, AuthResult, GrantType, TokenRequest, TokenResponse};

/// Mints shopper tokens from a canned template
pub struct TokenIssuer {
	template: TokenResponse,
	ttl_secs: u64,
	/// When set, requests must present this client id
	expected_client_id: Option<String>,
	/// When set, client_credentials grants must present this secret
	expected_client_secret: Option<String>,
}

impl TokenIssuer {
	pub fn new(template: TokenResponse, ttl_secs: u64) -> Self {
		Self {
			template,
			ttl_secs,
			expected_client_id: None,
			expected_client_secret: None,
		}
	}

	/// Require requests to carry the given client id
	pub fn with_expected_client_id(mut self, client_id: impl Into<String>) -> Self {
		let client_id = client_id.into();
		if !client_id.is_empty() {
			self.expected_client_id = Some(client_id);
		}
		self
	}

	/// Require client_credentials grants to carry the given secret
	pub fn with_expected_client_secret(mut self, client_secret: impl Into<String>) -> Self {
		let client_secret = client_secret.into();
		if !client_secret.is_empty() {
			self.expected_client_secret = Some(client_secret);
		}
		self
	}

	/// Answer a token request with a freshly minted copy of the template
	pub fn issue(&self, request: &TokenRequest) -> AuthResult<TokenResponse> {
		request.validate()?;

		if let Some(expected) = &self.expected_client_id {
			match &request.client_id {
				Some(client_id) if client_id == expected => {},
				other => {
					return Err(AuthError::UnknownClient {
						client_id: other.clone().unwrap_or_default(),
					})
				},
			}
		}

		if let Some(expected) = &self.expected_client_secret {
			if request.grant_type == GrantType::ClientCredentials
				&& request.client_secret.as_deref() != Some(expected.as_str())
			{
				return Err(AuthError::InvalidClientSecret {
					client_id: request.client_id.clone().unwrap_or_default(),
				});
			}
		}

		let mut token = match request.grant_type {
			// Session bridging needs a real identity provider behind it
			GrantType::SessionBridge => {
				return Err(AuthError::UnsupportedGrantType {
					grant_type: request.grant_type.to_string(),
				})
			},
			GrantType::RefreshToken => match &request.usid {
				Some(usid) => self.template.minted_for_session(usid),
				None => self.template.minted(),
			},
			GrantType::ClientCredentials | GrantType::AuthorizationCodePkce => {
				self.template.minted()
			},
		};

		token.expires_in = self.ttl_secs;
		Ok(token)
	}
}
