//! Shopmock Fixtures
//!
//! The canned payload catalog: every response the mock server hands out
//! originates here. Each module covers one payload family and exposes
//! plain constructors returning fully typed values; `FixtureSet` bundles
//! the default catalog the server is seeded with.
//!
//! Fixture data is deliberately boring — a small apparel catalog, one
//! registered shopper, two historical orders — so that front-end code and
//! tests exercising the mock see stable, plausible commerce payloads.

use shopmock_types::{
	auth::TokenResponse, baskets::Basket, categories::Category, customers::Customer,
	customers::CustomerProductList, orders::Order, products::Product, search::ProductSearchResult,
};

pub mod baskets;
pub mod categories;
pub mod customers;
pub mod faults;
pub mod orders;
pub mod products;
pub mod search;
pub mod tokens;

/// Well-known ids shared across the fixture catalog
pub struct FixtureIds;

impl FixtureIds {
	/// Registered shopper every customer/order fixture hangs off
	pub const CUSTOMER_ID: &'static str = "abkehFwKoXkbcRmrFIlaYYwKtJ";
	pub const CUSTOMER_NO: &'static str = "00000101";
	pub const CUSTOMER_EMAIL: &'static str = "jane.doe@example.com";

	/// Guest shopper used by anonymous basket flows
	pub const GUEST_CUSTOMER_ID: &'static str = "bcQhRGsdZlkXaRxcsdkSt0Wew1";

	pub const TEE_MASTER_ID: &'static str = "classic-crew-tee";
	pub const TEE_VARIANT_ID: &'static str = "classic-crew-tee-navy-m";
	pub const TOTE_ID: &'static str = "canvas-tote";
	pub const HOODIE_ID: &'static str = "trail-zip-hoodie";

	pub const COMPLETED_ORDER_NO: &'static str = "00000410";
	pub const OPEN_ORDER_NO: &'static str = "00000411";

	pub const WISH_LIST_ID: &'static str = "bcd08be5f883120d2c1d8a2689";

	pub const INVENTORY_LIST_ID: &'static str = "inventory-main";
	pub const CURRENCY: &'static str = "USD";
}

/// The complete canned catalog a mock server is seeded with
#[derive(Debug, Clone)]
pub struct FixtureSet {
	pub token_template: TokenResponse,
	pub products: Vec<Product>,
	pub category_tree: Category,
	pub orders: Vec<Order>,
	pub customers: Vec<Customer>,
	/// Product lists keyed by owning customer id
	pub product_lists: Vec<(String, CustomerProductList)>,
	pub search_template: ProductSearchResult,
	/// Template cloned (under a fresh id) for every created basket
	pub basket_template: Basket,
}

impl FixtureSet {
	/// The default catalog: apparel products, one registered shopper,
	/// two historical orders, a three-level category tree
	pub fn default_catalog() -> Self {
		Self {
			token_template: tokens::registered_token(),
			products: products::all(),
			category_tree: categories::storefront_catalog(),
			orders: orders::all(),
			customers: vec![customers::registered_customer()],
			product_lists: vec![(
				FixtureIds::CUSTOMER_ID.to_string(),
				customers::wish_list(),
			)],
			search_template: search::apparel_search_result(),
			basket_template: baskets::empty_basket(),
		}
	}
}

impl Default for FixtureSet {
	fn default() -> Self {
		Self::default_catalog()
	}
}
