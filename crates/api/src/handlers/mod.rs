pub mod auth;
pub mod baskets;
pub mod categories;
pub mod common;
pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod search;

pub use auth::post_token;
pub use baskets::{get_basket, post_basket_items, post_baskets};
pub use categories::get_category;
pub use customers::{get_customer, get_customer_product_lists, put_customer_password};
pub use health::{health, ready};
pub use orders::{get_order, get_orders};
pub use products::{get_product, get_products};
pub use search::get_product_search;
