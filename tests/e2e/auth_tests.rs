/// E2E tests for the token endpoint
use crate::mocks::{test_server, ApiRequests, TestServer};
use reqwest::Client;

#[tokio::test]
async fn test_client_credentials_mints_token() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/api/v1/auth/token", server.base_url))
		.form(&ApiRequests::client_credentials_form())
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["token_type"], "Bearer");
	assert!(body["access_token"].as_str().unwrap().len() > 20);
	assert!(!body["usid"].as_str().unwrap().is_empty());
	assert!(body["expires_in"].as_u64().unwrap() > 0);

	server.abort();
}

#[tokio::test]
async fn test_each_mint_rotates_usid() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let mut usids = Vec::new();
	for _ in 0..2 {
		let body: serde_json::Value = client
			.post(format!("{}/api/v1/auth/token", server.base_url))
			.form(&ApiRequests::client_credentials_form())
			.send()
			.await
			.unwrap()
			.json()
			.await
			.unwrap();
		usids.push(body["usid"].as_str().unwrap().to_string());
	}

	assert_ne!(usids[0], usids[1]);

	server.abort();
}

#[tokio::test]
async fn test_refresh_preserves_session() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.post(format!("{}/api/v1/auth/token", server.base_url))
		.form(&ApiRequests::refresh_form("keep-this-usid"))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(body["usid"], "keep-this-usid");

	server.abort();
}

#[tokio::test]
async fn test_session_bridge_is_answered_with_fault() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/api/v1/auth/token", server.base_url))
		.form(&ApiRequests::session_bridge_form())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["title"], "Unsupported Grant Type");
	assert!(body["type"].as_str().unwrap().contains("unsupported-grant-type"));

	server.abort();
}

#[tokio::test]
async fn test_refresh_without_token_is_rejected() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/api/v1/auth/token", server.base_url))
		.form(&[("grant_type", "refresh_token")])
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["arguments"]["parameter"], "refresh_token");

	server.abort();
}

#[tokio::test]
async fn test_client_auth_enforced_when_configured() {
	let server = TestServer::spawn_with_client_auth()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	// Missing credentials
	let resp = client
		.post(format!("{}/api/v1/auth/token", server.base_url))
		.form(&ApiRequests::client_credentials_form())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

	// Full credentials
	let resp = client
		.post(format!("{}/api/v1/auth/token", server.base_url))
		.form(&[
			("grant_type", "client_credentials"),
			("client_id", test_server::TEST_CLIENT_ID),
			("client_secret", test_server::TEST_CLIENT_SECRET),
		])
		.send()
		.await
		.unwrap();
	assert!(resp.status().is_success());

	server.abort();
}
