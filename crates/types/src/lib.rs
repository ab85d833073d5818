//! Shopmock Types
//!
//! Payload models for the shopmock storefront mock API.
//! This crate contains all wire shapes organized by business entity.

pub mod auth;
pub mod baskets;
pub mod categories;
pub mod customers;
pub mod models;
pub mod orders;
pub mod products;
pub mod search;
pub mod storage;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use auth::{AuthError, GrantType, TokenRequest, TokenResponse};

pub use baskets::{
	Basket, BasketError, BasketItemRequest, BasketResult, BasketValidationError,
	BasketValidationResult, CouponItem, PaymentCard, PaymentInstrument, ProductItem, Shipment,
	ShippingMethod, Taxation,
};

pub use orders::{
	ConfirmationStatus, ExportStatus, Order, OrderError, OrderResult, OrderSearchResult,
	OrderStatus, PaymentStatus, ShippingStatus,
};

pub use products::{
	ImageGroup, Inventory, MasterInfo, Product, ProductError, ProductResult, ProductType,
	ProductsResult, Variant, VariationAttribute, VariationAttributeValue,
};

pub use search::{
	ProductSearchHit, ProductSearchResult, Refinement, RefinementValue, SortingOption,
};

pub use categories::{Category, CategoryError, CategoryResult};

pub use customers::{
	AuthType, Customer, CustomerAddress, CustomerError, CustomerProductList,
	CustomerProductListItem, CustomerProductListResult, CustomerResult, ProductListType,
};

// Re-export shared wire models
pub use models::{Address, ApiFault, CustomerInfo, Image};

pub use storage::{
	BasketStorage, CatalogStorage, CustomerStorage, OrderStorage, Storage, StorageError,
	StorageResult,
};
