//! Shopmock API
//!
//! Axum-based API serving the canned commerce responses of the shopmock
//! mock server.

pub mod handlers;
pub mod pagination;
pub mod router;
pub mod state;
pub mod token_issuer;

pub use router::create_router;
pub use state::AppState;
pub use token_issuer::TokenIssuer;

#[cfg(feature = "openapi")]
pub mod openapi;
