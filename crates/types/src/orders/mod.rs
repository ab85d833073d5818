//! Order history payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::baskets::{PaymentInstrument, ProductItem, Shipment, Taxation};
use crate::models::{Address, CustomerInfo};

pub mod errors;

pub use errors::OrderError;

/// Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;

/// Placed order as returned by the order endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Order {
	pub order_no: String,
	pub status: OrderStatus,
	pub confirmation_status: ConfirmationStatus,
	pub export_status: ExportStatus,
	pub payment_status: PaymentStatus,
	pub shipping_status: ShippingStatus,

	pub creation_date: DateTime<Utc>,
	pub currency: String,
	pub customer_info: CustomerInfo,

	pub order_total: f64,
	pub product_sub_total: f64,
	pub shipping_total: f64,
	pub tax_total: f64,
	pub taxation: Taxation,

	pub product_items: Vec<ProductItem>,
	pub billing_address: Address,
	pub shipments: Vec<Shipment>,
	pub payment_instruments: Vec<PaymentInstrument>,
}

/// Overall order state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
	Created,
	New,
	Open,
	Completed,
	Cancelled,
	Failed,
}

/// Merchant confirmation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
	NotConfirmed,
	Confirmed,
}

/// Export-to-fulfillment state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
	NotExported,
	Ready,
	Exported,
	Failed,
}

/// Payment capture state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
	NotPaid,
	PartPaid,
	Paid,
}

/// Fulfillment state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ShippingStatus {
	NotShipped,
	PartShipped,
	Shipped,
}

impl std::fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OrderStatus::Created => write!(f, "created"),
			OrderStatus::New => write!(f, "new"),
			OrderStatus::Open => write!(f, "open"),
			OrderStatus::Completed => write!(f, "completed"),
			OrderStatus::Cancelled => write!(f, "cancelled"),
			OrderStatus::Failed => write!(f, "failed"),
		}
	}
}

impl Order {
	/// Total number of units across all line items
	pub fn item_count(&self) -> u32 {
		self.product_items.iter().map(|item| item.quantity).sum()
	}

	pub fn is_complete(&self) -> bool {
		self.status == OrderStatus::Completed
	}

	/// Check order totals hold together as a payload
	pub fn validate(&self) -> OrderResult<()> {
		if self.product_items.is_empty() {
			return Err(OrderError::EmptyOrder {
				order_no: self.order_no.clone(),
			});
		}

		let items_total: f64 = self.product_items.iter().map(|item| item.price).sum();
		let expected = crate::baskets::round_cents(items_total + self.shipping_total);
		if (self.order_total - expected).abs() > 0.01 {
			return Err(OrderError::TotalMismatch {
				order_no: self.order_no.clone(),
				expected,
				actual: self.order_total,
			});
		}

		Ok(())
	}
}

/// Paged envelope for order history lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchResult {
	pub limit: u32,
	pub data: Vec<Order>,
	pub offset: u32,
	pub total: u32,
}

impl OrderSearchResult {
	/// Window a full order list into a paged envelope
	pub fn page(orders: Vec<Order>, limit: u32, offset: u32) -> Self {
		let total = orders.len() as u32;
		let data: Vec<Order> = orders
			.into_iter()
			.skip(offset as usize)
			.take(limit as usize)
			.collect();

		Self {
			limit,
			data,
			offset,
			total,
		}
	}
}
