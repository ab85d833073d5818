//! Canned request payloads for e2e tests

use shopmock::serde_json::{json, Value};

/// API request data fixtures
#[allow(dead_code)]
pub struct ApiRequests;

#[allow(dead_code)]
impl ApiRequests {
	/// Form body for a client_credentials token request
	pub fn client_credentials_form() -> Vec<(&'static str, &'static str)> {
		vec![("grant_type", "client_credentials")]
	}

	/// Form body for a refresh_token request bound to a session
	pub fn refresh_form(usid: &str) -> Vec<(&'static str, String)> {
		vec![
			("grant_type", "refresh_token".to_string()),
			("refresh_token", "yDgQnVkQ0vUZLAhSEllMerX5wFrkzT4bWAYGt7kEPLU".to_string()),
			("usid", usid.to_string()),
		]
	}

	/// Form body for the unsupported session_bridge grant
	pub fn session_bridge_form() -> Vec<(&'static str, &'static str)> {
		vec![("grant_type", "session_bridge")]
	}

	/// Valid add-item request for the navy tee variant
	pub fn basket_item_request(product_id: &str, quantity: u32) -> Value {
		json!({
			"productId": product_id,
			"quantity": quantity
		})
	}

	/// Add-item request with an invalid zero quantity
	pub fn zero_quantity_item_request() -> Value {
		json!({
			"productId": "canvas-tote",
			"quantity": 0
		})
	}

	/// Password change request answered by the canned failure
	pub fn password_change_request() -> Value {
		json!({
			"currentPassword": "old-password-1!",
			"newPassword": "short"
		})
	}

	/// Malformed JSON string for testing error handling
	pub fn malformed_json() -> &'static str {
		"{ invalid json structure"
	}
}
