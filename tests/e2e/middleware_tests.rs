/// E2E tests for the middleware stack
use crate::mocks::{ApiRequests, TestServer};
use reqwest::Client;

#[tokio::test]
async fn test_unknown_route_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/no-such-endpoint", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}

#[tokio::test]
async fn test_wrong_http_method_is_405() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	// GET instead of POST
	let resp = client
		.get(format!("{}/api/v1/baskets", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

	server.abort();
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	// Create a basket first so the items route resolves
	let basket: serde_json::Value = client
		.post(format!("{}/api/v1/baskets", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let basket_id = basket["basketId"].as_str().unwrap();

	let resp = client
		.post(format!(
			"{}/api/v1/baskets/{}/items",
			server.base_url, basket_id
		))
		.body(ApiRequests::malformed_json())
		.header("content-type", "application/json")
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}

#[tokio::test]
async fn test_request_id_is_propagated() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.header("x-request-id", "e2e-req-42")
		.send()
		.await
		.unwrap();

	assert_eq!(
		resp.headers().get("x-request-id").unwrap(),
		"e2e-req-42"
	);

	server.abort();
}

#[tokio::test]
async fn test_canned_responses_are_not_cacheable() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.headers().get("cache-control").unwrap(), "no-cache");
	assert_eq!(
		resp.headers().get("x-content-type-options").unwrap(),
		"nosniff"
	);

	server.abort();
}
