//! Storage trait seam for pluggable fixture stores
//!
//! The mock server reads everything it serves from a store seeded with
//! canned data; baskets are the only entities written back at runtime.

use async_trait::async_trait;
use thiserror::Error;

use crate::baskets::Basket;
use crate::categories::Category;
use crate::customers::{Customer, CustomerProductList};
use crate::orders::Order;
use crate::products::Product;
use crate::search::ProductSearchResult;

/// Errors surfaced by storage implementations
#[derive(Error, Debug)]
pub enum StorageError {
	#[error("{entity} not found: {id}")]
	NotFound { entity: String, id: String },

	#[error("Storage backend error: {0}")]
	Backend(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Read access to the seeded catalog (products, categories, search)
#[async_trait]
pub trait CatalogStorage: Send + Sync {
	async fn get_product(&self, product_id: &str) -> StorageResult<Option<Product>>;

	/// Batch lookup preserving request order; unknown ids are skipped
	async fn list_products(&self, ids: &[String]) -> StorageResult<Vec<Product>>;

	async fn get_category(&self, category_id: &str) -> StorageResult<Option<Category>>;

	/// The canned search result template served for every query
	async fn search_template(&self) -> StorageResult<ProductSearchResult>;
}

/// Read/write access to live baskets
#[async_trait]
pub trait BasketStorage: Send + Sync {
	async fn create_basket(&self, basket: Basket) -> StorageResult<Basket>;

	async fn get_basket(&self, basket_id: &str) -> StorageResult<Option<Basket>>;

	async fn update_basket(&self, basket: Basket) -> StorageResult<Basket>;

	/// Returns true when a basket was actually removed
	async fn delete_basket(&self, basket_id: &str) -> StorageResult<bool>;
}

/// Read access to the seeded order history
#[async_trait]
pub trait OrderStorage: Send + Sync {
	async fn get_order(&self, order_no: &str) -> StorageResult<Option<Order>>;

	async fn list_orders_for_customer(&self, customer_id: &str) -> StorageResult<Vec<Order>>;
}

/// Read access to the seeded customer profiles and product lists
#[async_trait]
pub trait CustomerStorage: Send + Sync {
	async fn get_customer(&self, customer_id: &str) -> StorageResult<Option<Customer>>;

	async fn list_product_lists(
		&self,
		customer_id: &str,
	) -> StorageResult<Vec<CustomerProductList>>;
}

/// Umbrella trait the API state holds
#[async_trait]
pub trait Storage: CatalogStorage + BasketStorage + OrderStorage + CustomerStorage {
	async fn health_check(&self) -> StorageResult<bool>;
}
