//! Test server for integration tests
//!
//! Spawns the mock server on an ephemeral port with the default fixture
//! catalog, or with auth enforcement for token endpoint tests.

use axum::Router;
use shopmock::{api::routes::create_router, MockServerBuilder};
use tokio::task::JoinHandle;

/// Env var holding the client secret for auth-enforcing test servers
pub const CLIENT_SECRET_VAR: &str = "SHOPMOCK_TEST_CLIENT_SECRET";
pub const TEST_CLIENT_ID: &str = "storefront-client";
pub const TEST_CLIENT_SECRET: &str = "test-secret-for-e2e-tests";

/// Test server instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with the default fixture catalog
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let (_router, state) = MockServerBuilder::new().start().await?;
		let app: Router = create_router().with_state(state);

		Self::spawn_with_app(app).await
	}

	/// Spawn a test server that enforces client id and secret on the
	/// token endpoint
	#[allow(dead_code)]
	pub async fn spawn_with_client_auth() -> Result<Self, Box<dyn std::error::Error>> {
		std::env::set_var(CLIENT_SECRET_VAR, TEST_CLIENT_SECRET);

		let mut settings = shopmock::Settings::default();
		settings.auth.client_id = TEST_CLIENT_ID.to_string();
		settings.auth.client_secret = Some(
			shopmock::config::ConfigurableValue::from_env(CLIENT_SECRET_VAR),
		);

		let (_router, state) = MockServerBuilder::new()
			.with_settings(settings)
			.start()
			.await?;
		let app: Router = create_router().with_state(state);

		Self::spawn_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
