/// E2E tests for product search
use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_search_echoes_query_and_serves_canned_hits() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/product-search?q=tee", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["query"], "tee");
	assert_eq!(body["total"], 3);
	assert_eq!(body["hits"].as_array().unwrap().len(), 3);
	assert!(!body["refinements"].as_array().unwrap().is_empty());
	assert!(!body["sortingOptions"].as_array().unwrap().is_empty());

	server.abort();
}

#[tokio::test]
async fn test_search_pagination_windows_hits() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!(
			"{}/api/v1/product-search?q=tee&limit=2&offset=1",
			server.base_url
		))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(body["total"], 3);
	assert_eq!(body["offset"], 1);
	assert_eq!(body["hits"].as_array().unwrap().len(), 2);

	server.abort();
}

#[tokio::test]
async fn test_search_hits_resolve_to_product_fixtures() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!("{}/api/v1/product-search?q=", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	// Each hit must be fetchable as a product detail
	for hit in body["hits"].as_array().unwrap() {
		let product_id = hit["productId"].as_str().unwrap();
		let resp = client
			.get(format!("{}/api/v1/products/{}", server.base_url, product_id))
			.send()
			.await
			.unwrap();
		assert!(
			resp.status().is_success(),
			"search hit {} did not resolve",
			product_id
		);
	}

	server.abort();
}

#[tokio::test]
async fn test_refinement_counts_bounded_by_total() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!("{}/api/v1/product-search", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	let total = body["total"].as_u64().unwrap();
	for refinement in body["refinements"].as_array().unwrap() {
		for value in refinement["values"].as_array().unwrap() {
			assert!(value["hitCount"].as_u64().unwrap() <= total);
		}
	}

	server.abort();
}
