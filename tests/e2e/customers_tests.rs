/// E2E tests for customer endpoints
use crate::mocks::{ApiRequests, TestServer};
use reqwest::Client;
use shopmock::FixtureIds;

#[tokio::test]
async fn test_customer_profile_payload() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/customers/{}",
			server.base_url,
			FixtureIds::CUSTOMER_ID
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let customer: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(customer["customerNo"], FixtureIds::CUSTOMER_NO);
	assert_eq!(customer["authType"], "registered");
	assert_eq!(customer["email"], FixtureIds::CUSTOMER_EMAIL);
	assert_eq!(customer["enabled"], true);
	// Saved address fields flatten inline
	assert_eq!(customer["addresses"][0]["addressId"], "home");
	assert_eq!(customer["addresses"][0]["city"], "Burlington");

	server.abort();
}

#[tokio::test]
async fn test_unknown_customer_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/api/v1/customers/nobody", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}

#[tokio::test]
async fn test_wish_list_payload() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!(
			"{}/api/v1/customers/{}/product-lists",
			server.base_url,
			FixtureIds::CUSTOMER_ID
		))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(body["total"], 1);
	let list = &body["data"][0];
	assert_eq!(list["type"], "wish_list");
	let items = list["customerProductListItems"].as_array().unwrap();
	assert_eq!(items.len(), 2);
	for item in items {
		assert!(!item["productId"].as_str().unwrap().is_empty());
		assert!(item["quantity"].as_u64().unwrap() >= 1);
	}

	server.abort();
}

#[tokio::test]
async fn test_password_update_answers_canned_failure() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.put(format!(
			"{}/api/v1/customers/{}/password",
			server.base_url,
			FixtureIds::CUSTOMER_ID
		))
		.json(&ApiRequests::password_change_request())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
	let fault: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(fault["title"], "Invalid Password");
	assert!(fault["type"].as_str().unwrap().contains("invalid-password"));
	assert_eq!(fault["arguments"]["minLength"], "8");

	server.abort();
}

#[tokio::test]
async fn test_password_update_for_unknown_customer_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.put(format!("{}/api/v1/customers/nobody/password", server.base_url))
		.json(&ApiRequests::password_change_request())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
