//! Canned shopper token payloads

use shopmock_types::auth::{TokenResponse, DEFAULT_TOKEN_TTL_SECS};

use crate::FixtureIds;

// Mock JWT: a real-looking header.payload.signature split that decodes to
// nothing sensitive. The mock never verifies it.
const MOCK_ACCESS_TOKEN: &str = "eyJ2ZXIiOiIxLjAiLCJraWQiOiJtb2NrLWtleSIsInR5cCI6Imp3dCIsImFsZyI6Im5vbmUifQ.\
eyJzdWIiOiJtb2NrLXNob3BwZXIiLCJpc3MiOiJzaG9wbW9jayIsImF1ZCI6InN0b3JlZnJvbnQifQ.\
bW9jay1zaWduYXR1cmU";

/// Token for the registered fixture shopper
pub fn registered_token() -> TokenResponse {
	TokenResponse {
		access_token: MOCK_ACCESS_TOKEN.to_string(),
		refresh_token: "yDgQnVkQ0vUZLAhSEllMerX5wFrkzT4bWAYGt7kEPLU".to_string(),
		expires_in: DEFAULT_TOKEN_TTL_SECS,
		token_type: "Bearer".to_string(),
		usid: "048adcfb-aa93-4978-be9e-09cb569fdcb9".to_string(),
		customer_id: FixtureIds::CUSTOMER_ID.to_string(),
		enc_user_id: "ce5f0dcb28c5e8cd6ad0b1dbdf1ee9c1".to_string(),
		id_token: None,
	}
}

/// Token for an anonymous guest session
pub fn guest_token() -> TokenResponse {
	TokenResponse {
		customer_id: FixtureIds::GUEST_CUSTOMER_ID.to_string(),
		enc_user_id: String::new(),
		..registered_token()
	}
}
