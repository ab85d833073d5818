/// E2E tests for product endpoints
use crate::mocks::TestServer;
use reqwest::Client;
use shopmock::FixtureIds;

#[tokio::test]
async fn test_master_product_detail() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/products/{}",
			server.base_url,
			FixtureIds::TEE_MASTER_ID
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let product: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(product["type"]["master"], true);
	assert_eq!(product["variants"].as_array().unwrap().len(), 8);
	assert_eq!(product["variationAttributes"].as_array().unwrap().len(), 2);
	assert_eq!(product["price"], 24.0);
	assert_eq!(product["priceMax"], 26.0);
	assert!(!product["imageGroups"].as_array().unwrap().is_empty());

	server.abort();
}

#[tokio::test]
async fn test_variant_points_back_to_master() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let product: serde_json::Value = client
		.get(format!(
			"{}/api/v1/products/{}",
			server.base_url,
			FixtureIds::TEE_VARIANT_ID
		))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(product["type"]["variant"], true);
	assert_eq!(product["master"]["masterId"], FixtureIds::TEE_MASTER_ID);
	assert_eq!(product["inventory"]["orderable"], true);

	server.abort();
}

#[tokio::test]
async fn test_unknown_product_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/products/no-such-product", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
	let fault: serde_json::Value = resp.json().await.unwrap();
	assert!(fault["type"].as_str().unwrap().contains("not-found"));

	server.abort();
}

#[tokio::test]
async fn test_batch_lookup_skips_unknown_ids() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/products?ids={},{},no-such-product",
			server.base_url,
			FixtureIds::TOTE_ID,
			FixtureIds::HOODIE_ID
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["total"], 2);
	assert_eq!(body["data"][0]["id"], FixtureIds::TOTE_ID);
	assert_eq!(body["data"][1]["id"], FixtureIds::HOODIE_ID);

	server.abort();
}

#[tokio::test]
async fn test_batch_lookup_requires_ids() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/products", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}
