/// E2E tests for category endpoints
use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_root_serves_one_level_by_default() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/categories/root", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["id"], "root");

	let departments = body["categories"].as_array().unwrap();
	assert_eq!(departments.len(), 2);
	// Depth 1: departments come without their own subcategories
	for department in departments {
		assert!(department.get("categories").is_none());
	}

	server.abort();
}

#[tokio::test]
async fn test_levels_two_includes_sections() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!(
			"{}/api/v1/categories/root?levels=2",
			server.base_url
		))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	let mens = body["categories"]
		.as_array()
		.unwrap()
		.iter()
		.find(|c| c["id"] == "mens")
		.unwrap();
	let sections = mens["categories"].as_array().unwrap();
	assert!(sections.iter().any(|c| c["id"] == "mens-tops"));

	server.abort();
}

#[tokio::test]
async fn test_levels_above_platform_max_are_clamped() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!(
			"{}/api/v1/categories/root?levels=9",
			server.base_url
		))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	// Max depth is 2, so the answer matches levels=2
	let mens = body["categories"]
		.as_array()
		.unwrap()
		.iter()
		.find(|c| c["id"] == "mens")
		.unwrap();
	assert!(mens.get("categories").is_some());

	server.abort();
}

#[tokio::test]
async fn test_subtree_lookup_keeps_parent_link() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!(
			"{}/api/v1/categories/mens-tops",
			server.base_url
		))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(body["id"], "mens-tops");
	assert_eq!(body["parentCategoryId"], "mens");

	server.abort();
}

#[tokio::test]
async fn test_unknown_category_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/categories/no-such-category",
			server.base_url
		))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
