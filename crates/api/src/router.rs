use axum::{
	http::header::{HeaderName, HeaderValue},
	routing::{get, post, put},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	set_header::SetResponseHeaderLayer,
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	get_basket, get_category, get_customer, get_customer_product_lists, get_order, get_orders,
	get_product, get_product_search, get_products, health, post_basket_items, post_baskets,
	post_token, put_customer_password, ready,
};
use crate::state::AppState;
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router() -> Router<AppState> {
	// Layers prepared first so they're in scope for all cfg paths
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	// Base router
	let base_router = Router::new()
		.route("/health", get(health))
		.route("/ready", get(ready))
		.route("/api/v1/auth/token", post(post_token))
		.route("/api/v1/baskets", post(post_baskets))
		.route("/api/v1/baskets/{basket_id}", get(get_basket))
		.route("/api/v1/baskets/{basket_id}/items", post(post_basket_items))
		.route("/api/v1/orders", get(get_orders))
		.route("/api/v1/orders/{order_no}", get(get_order))
		.route("/api/v1/products", get(get_products))
		.route("/api/v1/products/{product_id}", get(get_product))
		.route("/api/v1/product-search", get(get_product_search))
		.route("/api/v1/categories/{category_id}", get(get_category))
		.route("/api/v1/customers/{customer_id}", get(get_customer))
		.route(
			"/api/v1/customers/{customer_id}/product-lists",
			get(get_customer_product_lists),
		)
		.route(
			"/api/v1/customers/{customer_id}/password",
			put(put_customer_password),
		);

	// Conditionally add OpenAPI endpoints
	#[cfg(feature = "openapi")]
	let router = {
		// SwaggerUI automatically provides the OpenAPI JSON endpoint
		base_router
			.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
	};

	#[cfg(not(feature = "openapi"))]
	let router = base_router;

	// Apply common layers
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	// Default response headers: the mock serves volatile canned data, so
	// clients must not cache, sniff, or frame it
	router.layer(
		ServiceBuilder::new()
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-content-type-options"),
				HeaderValue::from_static("nosniff"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-frame-options"),
				HeaderValue::from_static("DENY"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("cache-control"),
				HeaderValue::from_static("no-cache"),
			)),
	)
}
