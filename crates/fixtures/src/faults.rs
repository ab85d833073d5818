//! Canned fault payloads

use shopmock_types::models::ApiFault;

/// The canned failure answered by the password-update endpoint
pub fn password_update_failure() -> ApiFault {
	ApiFault::new(
		"invalid-password",
		"Invalid Password",
		"The new password does not meet the acceptance criteria.",
	)
	.with_argument("minLength", "8")
	.with_argument("minSpecialChars", "1")
}

/// Fault for unsupported token grant types
pub fn unsupported_grant_type(grant_type: &str) -> ApiFault {
	ApiFault::new(
		"unsupported-grant-type",
		"Unsupported Grant Type",
		format!("Grant type '{}' is not supported by this endpoint.", grant_type),
	)
	.with_argument("grantType", grant_type)
}
