//! Shopmock Server
//!
//! Main entry point for the mock storefront commerce API

use shopmock::MockServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	MockServerBuilder::new().start_server().await
}
