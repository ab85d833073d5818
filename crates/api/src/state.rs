use std::sync::Arc;

use shopmock_types::{Basket, Storage};

use crate::token_issuer::TokenIssuer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub storage: Arc<dyn Storage>,
	pub token_issuer: Arc<TokenIssuer>,
	/// Template cloned under a fresh id for every created basket
	pub basket_template: Arc<Basket>,
}
