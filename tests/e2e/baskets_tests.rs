/// E2E tests for basket endpoints
use crate::mocks::{ApiRequests, TestServer};
use reqwest::Client;

async fn create_basket(client: &Client, base_url: &str) -> serde_json::Value {
	let resp = client
		.post(format!("{}/api/v1/baskets", base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
	resp.json().await.unwrap()
}

#[tokio::test]
async fn test_create_basket_from_template() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let basket = create_basket(&client, &server.base_url).await;

	assert!(!basket["basketId"].as_str().unwrap().is_empty());
	assert_eq!(basket["currency"], "USD");
	assert_eq!(basket["orderTotal"], 0.0);
	assert!(basket["productItems"].as_array().unwrap().is_empty());
	assert_eq!(basket["shipments"][0]["shipmentId"], "me");

	server.abort();
}

#[tokio::test]
async fn test_created_baskets_get_distinct_ids() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let first = create_basket(&client, &server.base_url).await;
	let second = create_basket(&client, &server.base_url).await;

	assert_ne!(first["basketId"], second["basketId"]);

	server.abort();
}

#[tokio::test]
async fn test_get_stored_basket() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let created = create_basket(&client, &server.base_url).await;
	let basket_id = created["basketId"].as_str().unwrap();

	let resp = client
		.get(format!("{}/api/v1/baskets/{}", server.base_url, basket_id))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let basket: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(basket["basketId"], created["basketId"]);

	server.abort();
}

#[tokio::test]
async fn test_unknown_basket_is_fault_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/baskets/no-such-basket", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
	let fault: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(fault["title"], "Not Found");
	assert_eq!(fault["arguments"]["basketId"], "no-such-basket");

	server.abort();
}

#[tokio::test]
async fn test_add_item_rolls_totals() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let created = create_basket(&client, &server.base_url).await;
	let basket_id = created["basketId"].as_str().unwrap();

	let resp = client
		.post(format!(
			"{}/api/v1/baskets/{}/items",
			server.base_url, basket_id
		))
		.json(&ApiRequests::basket_item_request("classic-crew-tee-navy-m", 2))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let basket: serde_json::Value = resp.json().await.unwrap();

	let items = basket["productItems"].as_array().unwrap();
	assert_eq!(items.len(), 1);
	assert_eq!(items[0]["productId"], "classic-crew-tee-navy-m");
	assert_eq!(items[0]["quantity"], 2);
	// Two units at the seeded 24.00 price
	assert_eq!(items[0]["price"], 48.0);
	assert_eq!(basket["orderTotal"], 48.0);

	server.abort();
}

#[tokio::test]
async fn test_add_unknown_product_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let created = create_basket(&client, &server.base_url).await;
	let basket_id = created["basketId"].as_str().unwrap();

	let resp = client
		.post(format!(
			"{}/api/v1/baskets/{}/items",
			server.base_url, basket_id
		))
		.json(&ApiRequests::basket_item_request("no-such-product", 1))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
	let fault: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(fault["arguments"]["productId"], "no-such-product");

	server.abort();
}

#[tokio::test]
async fn test_add_zero_quantity_is_rejected() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let created = create_basket(&client, &server.base_url).await;
	let basket_id = created["basketId"].as_str().unwrap();

	let resp = client
		.post(format!(
			"{}/api/v1/baskets/{}/items",
			server.base_url, basket_id
		))
		.json(&ApiRequests::zero_quantity_item_request())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}
