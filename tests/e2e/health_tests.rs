/// E2E tests for health and readiness probes
use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_health_returns_ok() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	assert_eq!(resp.text().await.unwrap(), "OK");

	server.abort();
}

#[tokio::test]
async fn test_ready_reports_seeded_storage() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/ready", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "ready");
	assert_eq!(body["storage_healthy"], true);

	server.abort();
}
