//! Shopmock
//!
//! A mock storefront commerce API server: typed payload models, a canned
//! fixture catalog, and an axum surface that returns the fixtures so
//! front-ends and automated tests can stub the real commerce platform.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

// Core payload types - the most commonly used entities
pub use shopmock_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Shared wire models
	ApiFault,
	Basket,
	BasketItemRequest,
	Category,
	Customer,
	CustomerProductList,
	GrantType,
	Order,
	OrderSearchResult,
	Product,
	ProductSearchResult,
	ProductsResult,
	TokenRequest,
	TokenResponse,
};

// Fixture catalog
pub use shopmock_fixtures::{FixtureIds, FixtureSet};

// Storage layer
pub use shopmock_storage::{MemoryStore, Storage};

// API layer
pub use shopmock_api::{create_router, AppState, TokenIssuer};

// Config
pub use shopmock_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for qualified access
pub mod types {
	pub use shopmock_types::*;
}

pub mod fixtures {
	pub use shopmock_fixtures::*;
}

pub mod storage {
	pub use shopmock_storage::*;
}

pub mod config {
	pub use shopmock_config::*;
}

pub mod api {
	pub use shopmock_api::*;
	pub mod routes {
		pub use shopmock_api::{create_router, AppState};
	}
}

/// Builder wiring settings, storage, and fixtures into a running mock server
pub struct MockServerBuilder {
	settings: Option<Settings>,
	fixtures: Option<FixtureSet>,
	storage: Option<MemoryStore>,
}

impl MockServerBuilder {
	/// Create a builder with the default fixture catalog and settings
	pub fn new() -> Self {
		Self {
			settings: None,
			fixtures: None,
			storage: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the default fixture catalog
	pub fn with_fixtures(mut self, fixtures: FixtureSet) -> Self {
		self.fixtures = Some(fixtures);
		self
	}

	/// Provide a pre-configured store; it is still seeded on start
	pub fn with_storage(mut self, storage: MemoryStore) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Seed storage and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid settings: {}", e))?;

		let fixtures = self.fixtures.unwrap_or_default();
		if fixtures.basket_template.currency != settings.site.currency {
			warn!(
				"Site currency {} differs from fixture currency {}; fixtures win",
				settings.site.currency, fixtures.basket_template.currency
			);
		}

		let store = self
			.storage
			.unwrap_or_else(|| MemoryStore::with_basket_ttl(settings.storage.basket_ttl_secs));
		store.seed_products(fixtures.products);
		store.seed_category_tree(fixtures.category_tree);
		store.seed_orders(fixtures.orders);
		store.seed_customers(fixtures.customers);
		store.seed_product_lists(fixtures.product_lists);
		store.seed_search_template(fixtures.search_template);

		let stats = store.stats();
		info!(
			"Seeded {} product(s), {} categorie(s), {} order(s), {} customer(s)",
			stats.products, stats.categories, stats.orders, stats.customers
		);

		// Abandoned baskets are swept in the background
		store.start_ttl_cleanup();

		let mut token_issuer = TokenIssuer::new(
			fixtures.token_template,
			settings.auth.token_ttl_secs,
		)
		.with_expected_client_id(settings.auth.client_id.clone());
		if let Some(secret) = &settings.auth.client_secret {
			let secret = secret
				.resolve()
				.map_err(|e| format!("Failed to resolve auth client secret: {}", e))?;
			token_issuer = token_issuer.with_expected_client_secret(secret);
		}

		let app_state = AppState {
			storage: Arc::new(store),
			token_issuer: Arc::new(token_issuer),
			basket_template: Arc::new(fixtures.basket_template),
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Handles everything needed to run the mock: loading .env and the
	/// config file, initializing tracing, seeding storage, binding and
	/// serving the application.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings)?;

		log_service_info();
		info!(
			"🔧 Configuring mock storefront '{}' ({} / {})",
			settings.site.site_id, settings.site.currency, settings.site.locale
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  POST /api/v1/auth/token");
		info!("  POST /api/v1/baskets");
		info!("  GET  /api/v1/baskets/{{id}}");
		info!("  POST /api/v1/baskets/{{id}}/items");
		info!("  GET  /api/v1/orders");
		info!("  GET  /api/v1/orders/{{no}}");
		info!("  GET  /api/v1/products");
		info!("  GET  /api/v1/products/{{id}}");
		info!("  GET  /api/v1/product-search");
		info!("  GET  /api/v1/categories/{{id}}");
		info!("  GET  /api/v1/customers/{{id}}");
		info!("  GET  /api/v1/customers/{{id}}/product-lists");
		info!("  PUT  /api/v1/customers/{{id}}/password");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app).await?;

		Ok(())
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use shopmock_config::LogFormat;

		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}
}

impl Default for MockServerBuilder {
	fn default() -> Self {
		Self::new()
	}
}
