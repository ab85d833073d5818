//! In-memory store backed by DashMap, with basket TTL support
//!
//! Catalog entities (products, categories, orders, customers, product
//! lists, the search template) are seeded once and only read afterwards.
//! Baskets are created and updated at runtime and expire after a TTL so
//! long-running mock servers do not accumulate abandoned carts.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use tokio::time::interval;
use tracing::{debug, info};

use shopmock_types::{
	Basket, Category, Customer, CustomerProductList, Order, Product, ProductSearchResult,
};

use crate::traits::{
	BasketStorage, CatalogStorage, CustomerStorage, OrderStorage, Storage, StorageError,
	StorageResult,
};

const DEFAULT_BASKET_TTL_SECS: i64 = 24 * 60 * 60;
const CLEANUP_INTERVAL_SECS: u64 = 60;

/// In-memory store for fixture data and live baskets
#[derive(Clone)]
pub struct MemoryStore {
	products: Arc<DashMap<String, Product>>,
	/// Each entry holds the subtree rooted at that category id
	categories: Arc<DashMap<String, Category>>,
	baskets: Arc<DashMap<String, Basket>>,
	orders: Arc<DashMap<String, Order>>,
	customers: Arc<DashMap<String, Customer>>,
	product_lists: Arc<DashMap<String, Vec<CustomerProductList>>>,
	search_template: Arc<RwLock<Option<ProductSearchResult>>>,
	basket_ttl: Duration,
	basket_ttl_enabled: bool,
}

/// Counts of stored entities, used by readiness reporting and tests
#[derive(Debug, Clone, PartialEq)]
pub struct StorageStats {
	pub products: usize,
	pub categories: usize,
	pub baskets: usize,
	pub orders: usize,
	pub customers: usize,
}

impl MemoryStore {
	/// Create an empty store with the default basket TTL
	pub fn new() -> Self {
		Self {
			products: Arc::new(DashMap::new()),
			categories: Arc::new(DashMap::new()),
			baskets: Arc::new(DashMap::new()),
			orders: Arc::new(DashMap::new()),
			customers: Arc::new(DashMap::new()),
			product_lists: Arc::new(DashMap::new()),
			search_template: Arc::new(RwLock::new(None)),
			basket_ttl: Duration::seconds(DEFAULT_BASKET_TTL_SECS),
			basket_ttl_enabled: true,
		}
	}

	/// Create a store with a custom basket TTL; zero disables expiry
	pub fn with_basket_ttl(ttl_secs: i64) -> Self {
		let mut store = Self::new();
		if ttl_secs <= 0 {
			store.basket_ttl_enabled = false;
		} else {
			store.basket_ttl = Duration::seconds(ttl_secs);
		}
		store
	}

	/// Seed products by id
	pub fn seed_products(&self, products: Vec<Product>) {
		for product in products {
			self.products.insert(product.id.clone(), product);
		}
	}

	/// Seed the category tree, indexing every subtree by its id
	pub fn seed_category_tree(&self, root: Category) {
		fn index(map: &DashMap<String, Category>, node: &Category) {
			map.insert(node.id.clone(), node.clone());
			for child in &node.categories {
				index(map, child);
			}
		}
		index(&self.categories, &root);
	}

	/// Seed orders by order number
	pub fn seed_orders(&self, orders: Vec<Order>) {
		for order in orders {
			self.orders.insert(order.order_no.clone(), order);
		}
	}

	/// Seed customers by id
	pub fn seed_customers(&self, customers: Vec<Customer>) {
		for customer in customers {
			self.customers.insert(customer.customer_id.clone(), customer);
		}
	}

	/// Seed product lists keyed by owning customer id
	pub fn seed_product_lists(&self, lists: Vec<(String, CustomerProductList)>) {
		for (customer_id, list) in lists {
			self.product_lists
				.entry(customer_id)
				.or_default()
				.push(list);
		}
	}

	/// Seed the canned search result template
	pub fn seed_search_template(&self, template: ProductSearchResult) {
		*self
			.search_template
			.write()
			.expect("search template lock poisoned") = Some(template);
	}

	/// Start the TTL cleanup task for expired baskets
	pub fn start_ttl_cleanup(&self) -> tokio::task::JoinHandle<()> {
		if !self.basket_ttl_enabled {
			return tokio::spawn(async {});
		}

		let baskets = Arc::clone(&self.baskets);
		let ttl = self.basket_ttl;
		tokio::spawn(async move {
			let mut cleanup_interval =
				interval(std::time::Duration::from_secs(CLEANUP_INTERVAL_SECS));

			loop {
				cleanup_interval.tick().await;

				let cutoff = Utc::now() - ttl;
				let expired: Vec<String> = baskets
					.iter()
					.filter(|entry| entry.value().last_modified < cutoff)
					.map(|entry| entry.key().clone())
					.collect();

				if !expired.is_empty() {
					debug!("Cleaning up {} expired baskets", expired.len());
					for basket_id in expired {
						baskets.remove(&basket_id);
					}
				}
			}
		})
	}

	/// Remove expired baskets manually, returning how many were dropped
	pub fn cleanup_expired_baskets(&self) -> usize {
		if !self.basket_ttl_enabled {
			return 0;
		}

		let cutoff = Utc::now() - self.basket_ttl;
		let expired: Vec<String> = self
			.baskets
			.iter()
			.filter(|entry| entry.value().last_modified < cutoff)
			.map(|entry| entry.key().clone())
			.collect();

		let count = expired.len();
		for basket_id in expired {
			self.baskets.remove(&basket_id);
		}

		if count > 0 {
			info!("Cleaned up {} expired baskets", count);
		}
		count
	}

	pub fn stats(&self) -> StorageStats {
		StorageStats {
			products: self.products.len(),
			categories: self.categories.len(),
			baskets: self.baskets.len(),
			orders: self.orders.len(),
			customers: self.customers.len(),
		}
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl CatalogStorage for MemoryStore {
	async fn get_product(&self, product_id: &str) -> StorageResult<Option<Product>> {
		Ok(self.products.get(product_id).map(|entry| entry.clone()))
	}

	async fn list_products(&self, ids: &[String]) -> StorageResult<Vec<Product>> {
		Ok(ids
			.iter()
			.filter_map(|id| self.products.get(id).map(|entry| entry.clone()))
			.collect())
	}

	async fn get_category(&self, category_id: &str) -> StorageResult<Option<Category>> {
		Ok(self.categories.get(category_id).map(|entry| entry.clone()))
	}

	async fn search_template(&self) -> StorageResult<ProductSearchResult> {
		self.search_template
			.read()
			.map_err(|_| StorageError::Backend("search template lock poisoned".to_string()))?
			.clone()
			.ok_or_else(|| StorageError::Backend("search template not seeded".to_string()))
	}
}

#[async_trait]
impl BasketStorage for MemoryStore {
	async fn create_basket(&self, basket: Basket) -> StorageResult<Basket> {
		self.baskets.insert(basket.basket_id.clone(), basket.clone());
		Ok(basket)
	}

	async fn get_basket(&self, basket_id: &str) -> StorageResult<Option<Basket>> {
		Ok(self.baskets.get(basket_id).map(|entry| entry.clone()))
	}

	async fn update_basket(&self, basket: Basket) -> StorageResult<Basket> {
		if !self.baskets.contains_key(&basket.basket_id) {
			return Err(StorageError::NotFound {
				entity: "basket".to_string(),
				id: basket.basket_id,
			});
		}
		self.baskets.insert(basket.basket_id.clone(), basket.clone());
		Ok(basket)
	}

	async fn delete_basket(&self, basket_id: &str) -> StorageResult<bool> {
		Ok(self.baskets.remove(basket_id).is_some())
	}
}

#[async_trait]
impl OrderStorage for MemoryStore {
	async fn get_order(&self, order_no: &str) -> StorageResult<Option<Order>> {
		Ok(self.orders.get(order_no).map(|entry| entry.clone()))
	}

	async fn list_orders_for_customer(&self, customer_id: &str) -> StorageResult<Vec<Order>> {
		let mut orders: Vec<Order> = self
			.orders
			.iter()
			.filter(|entry| entry.value().customer_info.customer_id == customer_id)
			.map(|entry| entry.value().clone())
			.collect();

		// Order history is served newest first
		orders.sort_by(|a, b| b.creation_date.cmp(&a.creation_date));
		Ok(orders)
	}
}

#[async_trait]
impl CustomerStorage for MemoryStore {
	async fn get_customer(&self, customer_id: &str) -> StorageResult<Option<Customer>> {
		Ok(self.customers.get(customer_id).map(|entry| entry.clone()))
	}

	async fn list_product_lists(
		&self,
		customer_id: &str,
	) -> StorageResult<Vec<CustomerProductList>> {
		Ok(self
			.product_lists
			.get(customer_id)
			.map(|entry| entry.clone())
			.unwrap_or_default())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		// The store is healthy when the catalog has been seeded
		Ok(!self.products.is_empty())
	}
}
