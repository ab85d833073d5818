//! Basket payloads and the canned basket flow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::models::{Address, CustomerInfo};

pub mod errors;
pub mod request;

pub use errors::{BasketError, BasketValidationError};
pub use request::BasketItemRequest;

/// Result type for basket operations
pub type BasketResult<T> = Result<T, BasketError>;

/// Result type for basket validation operations
pub type BasketValidationResult<T> = Result<T, BasketValidationError>;

/// Tax accounting mode of a basket or order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Taxation {
	/// Item prices include tax
	Gross,
	/// Tax is added on top of item prices
	Net,
}

/// Shopping basket as returned by the basket endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Basket {
	pub basket_id: String,
	pub currency: String,
	pub customer_info: CustomerInfo,
	pub creation_date: DateTime<Utc>,
	pub last_modified: DateTime<Utc>,

	pub order_total: f64,
	pub product_sub_total: f64,
	pub product_total: f64,
	pub shipping_total: f64,
	pub tax_total: f64,
	pub taxation: Taxation,

	pub product_items: Vec<ProductItem>,
	pub shipments: Vec<Shipment>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub payment_instruments: Vec<PaymentInstrument>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub coupon_items: Vec<CouponItem>,
}

/// Line item inside a basket or order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
	pub item_id: String,
	pub product_id: String,
	pub product_name: String,
	pub quantity: u32,
	/// Unit price
	pub base_price: f64,
	/// Line total before adjustments
	pub price: f64,
	pub price_after_item_discount: f64,
	pub tax: f64,
	pub tax_rate: f64,
	#[serde(default)]
	pub gift: bool,
	#[serde(default)]
	pub bonus_product_line_item: bool,
	pub shipment_id: String,
}

impl ProductItem {
	/// Re-derive line totals after a quantity change
	pub fn with_quantity(mut self, quantity: u32) -> Self {
		self.quantity = quantity;
		self.price = self.base_price * quantity as f64;
		self.price_after_item_discount = self.price;
		self.tax = round_cents(self.price * self.tax_rate);
		self
	}
}

/// Shipment grouping of basket items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
	pub shipment_id: String,
	#[serde(default)]
	pub gift: bool,
	pub shipping_address: Option<Address>,
	pub shipping_method: Option<ShippingMethod>,
}

/// Shipping method attached to a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
	pub id: String,
	pub name: String,
	pub description: Option<String>,
	pub price: f64,
}

/// Payment instrument attached to a basket or order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstrument {
	pub payment_instrument_id: String,
	pub payment_method_id: String,
	pub amount: f64,
	pub payment_card: Option<PaymentCard>,
}

/// Masked card details on a payment instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
	pub card_type: String,
	pub masked_number: String,
	pub expiration_month: u8,
	pub expiration_year: u16,
	pub holder: String,
}

/// Coupon applied to a basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CouponItem {
	pub coupon_item_id: String,
	pub code: String,
	pub status_code: String,
	pub valid: bool,
}

impl Basket {
	/// Create an empty basket for the given shopper
	pub fn new(currency: impl Into<String>, customer_info: CustomerInfo) -> Self {
		let now = Utc::now();
		Self {
			basket_id: Uuid::new_v4().to_string(),
			currency: currency.into(),
			customer_info,
			creation_date: now,
			last_modified: now,
			order_total: 0.0,
			product_sub_total: 0.0,
			product_total: 0.0,
			shipping_total: 0.0,
			tax_total: 0.0,
			taxation: Taxation::Gross,
			product_items: Vec::new(),
			shipments: vec![Shipment {
				shipment_id: "me".to_string(),
				gift: false,
				shipping_address: None,
				shipping_method: None,
			}],
			payment_instruments: Vec::new(),
			coupon_items: Vec::new(),
		}
	}

	/// Total number of units across all line items
	pub fn item_count(&self) -> u32 {
		self.product_items.iter().map(|item| item.quantity).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.product_items.is_empty()
	}

	/// Append a line item and roll the totals forward
	pub fn add_product_item(&mut self, item: ProductItem) {
		self.product_sub_total = round_cents(self.product_sub_total + item.price);
		self.product_total = round_cents(self.product_total + item.price_after_item_discount);
		self.tax_total = round_cents(self.tax_total + item.tax);
		self.order_total = round_cents(self.product_total + self.shipping_total);
		self.last_modified = Utc::now();
		self.product_items.push(item);
	}

	/// Re-key the basket under a fresh id, used when cloning a template
	pub fn with_fresh_id(mut self) -> Self {
		self.basket_id = Uuid::new_v4().to_string();
		let now = Utc::now();
		self.creation_date = now;
		self.last_modified = now;
		self
	}

	/// Check the basket holds together as a payload
	pub fn validate(&self) -> BasketValidationResult<()> {
		if self.currency.is_empty() {
			return Err(BasketValidationError::MissingCurrency);
		}

		for item in &self.product_items {
			if item.quantity == 0 {
				return Err(BasketValidationError::InvalidQuantity {
					product_id: item.product_id.clone(),
				});
			}
			if item.price < 0.0 || item.base_price < 0.0 {
				return Err(BasketValidationError::NegativePrice {
					product_id: item.product_id.clone(),
				});
			}
		}

		if self.order_total < 0.0 {
			return Err(BasketValidationError::NegativeTotal {
				field: "orderTotal".to_string(),
			});
		}

		let expected = round_cents(self.product_total + self.shipping_total);
		if (self.order_total - expected).abs() > 0.01 {
			return Err(BasketValidationError::TotalMismatch {
				expected,
				actual: self.order_total,
			});
		}

		Ok(())
	}
}

/// Round a monetary amount to cents, keeping totals stable across additions
pub fn round_cents(amount: f64) -> f64 {
	(amount * 100.0).round() / 100.0
}
