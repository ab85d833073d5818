/// E2E tests for order history endpoints
use crate::mocks::TestServer;
use reqwest::Client;
use shopmock::FixtureIds;

#[tokio::test]
async fn test_order_history_for_customer() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/orders?customer_id={}",
			server.base_url,
			FixtureIds::CUSTOMER_ID
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["total"], 2);
	assert_eq!(body["offset"], 0);

	// Newest first: the open order precedes the completed one
	let data = body["data"].as_array().unwrap();
	assert_eq!(data[0]["orderNo"], FixtureIds::OPEN_ORDER_NO);
	assert_eq!(data[1]["orderNo"], FixtureIds::COMPLETED_ORDER_NO);

	server.abort();
}

#[tokio::test]
async fn test_order_history_pagination() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/orders?customer_id={}&limit=1&offset=1",
			server.base_url,
			FixtureIds::CUSTOMER_ID
		))
		.send()
		.await
		.unwrap();

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["total"], 2);
	assert_eq!(body["limit"], 1);
	let data = body["data"].as_array().unwrap();
	assert_eq!(data.len(), 1);
	assert_eq!(data[0]["orderNo"], FixtureIds::COMPLETED_ORDER_NO);

	server.abort();
}

#[tokio::test]
async fn test_order_history_requires_customer_id() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/orders", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}

#[tokio::test]
async fn test_unknown_customer_has_empty_history() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/orders?customer_id=nobody",
			server.base_url
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["total"], 0);
	assert!(body["data"].as_array().unwrap().is_empty());

	server.abort();
}

#[tokio::test]
async fn test_single_order_payload() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/orders/{}",
			server.base_url,
			FixtureIds::COMPLETED_ORDER_NO
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let order: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(order["status"], "completed");
	assert_eq!(order["paymentStatus"], "paid");
	assert_eq!(order["orderTotal"], 71.99);
	assert!(!order["productItems"].as_array().unwrap().is_empty());
	assert_eq!(order["billingAddress"]["city"], "Burlington");

	server.abort();
}

#[tokio::test]
async fn test_unknown_order_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/orders/99999999", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
