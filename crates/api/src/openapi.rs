//! OpenAPI documentation for the mock surface

use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Shopmock API",
		description = "Mock storefront commerce API serving canned responses"
	),
	paths(
		handlers::health::health,
		handlers::health::ready,
		handlers::auth::post_token,
		handlers::baskets::post_baskets,
		handlers::baskets::get_basket,
		handlers::baskets::post_basket_items,
		handlers::orders::get_orders,
		handlers::orders::get_order,
		handlers::products::get_product,
		handlers::products::get_products,
		handlers::search::get_product_search,
		handlers::categories::get_category,
		handlers::customers::get_customer,
		handlers::customers::get_customer_product_lists,
		handlers::customers::put_customer_password,
	),
	components(schemas(
		shopmock_types::auth::TokenRequest,
		shopmock_types::auth::TokenResponse,
		shopmock_types::Basket,
		shopmock_types::BasketItemRequest,
		shopmock_types::Order,
		shopmock_types::OrderSearchResult,
		shopmock_types::Product,
		shopmock_types::ProductsResult,
		shopmock_types::ProductSearchResult,
		shopmock_types::Category,
		shopmock_types::Customer,
		shopmock_types::CustomerProductListResult,
		shopmock_types::models::ApiFault,
	)),
	tags(
		(name = "health", description = "Service probes"),
		(name = "auth", description = "Shopper token minting"),
		(name = "baskets", description = "Basket flow"),
		(name = "orders", description = "Order history"),
		(name = "products", description = "Product details"),
		(name = "search", description = "Product search"),
		(name = "categories", description = "Category tree"),
		(name = "customers", description = "Customer profiles"),
	)
)]
pub struct ApiDoc;
