//! Canned order history payloads

use chrono::{Duration, Utc};
use shopmock_types::{
	baskets::{round_cents, PaymentCard, PaymentInstrument, Shipment, Taxation},
	models::CustomerInfo,
	orders::{
		ConfirmationStatus, ExportStatus, Order, OrderStatus, PaymentStatus, ShippingStatus,
	},
};
use uuid::Uuid;

use crate::{baskets, FixtureIds};

/// Order history of the registered fixture shopper, newest first
pub fn all() -> Vec<Order> {
	vec![open_order(), completed_order()]
}

/// Older order that ran the whole lifecycle: paid, exported, shipped
pub fn completed_order() -> Order {
	let items = vec![
		baskets::product_item(FixtureIds::TEE_VARIANT_ID, "Classic Crew Tee", 24.0, 2),
		baskets::product_item(FixtureIds::TOTE_ID, "Everyday Canvas Tote", 18.0, 1),
	];
	let mut order = order_base(FixtureIds::COMPLETED_ORDER_NO, items);

	order.status = OrderStatus::Completed;
	order.confirmation_status = ConfirmationStatus::Confirmed;
	order.export_status = ExportStatus::Exported;
	order.payment_status = PaymentStatus::Paid;
	order.shipping_status = ShippingStatus::Shipped;
	order.creation_date = Utc::now() - Duration::days(42);
	order
}

/// Recent order still awaiting fulfillment
pub fn open_order() -> Order {
	let items = vec![baskets::product_item(
		FixtureIds::HOODIE_ID,
		"Trail Zip Hoodie",
		68.0,
		1,
	)];
	let mut order = order_base(FixtureIds::OPEN_ORDER_NO, items);

	order.status = OrderStatus::New;
	order.confirmation_status = ConfirmationStatus::Confirmed;
	order.export_status = ExportStatus::Ready;
	order.payment_status = PaymentStatus::Paid;
	order.shipping_status = ShippingStatus::NotShipped;
	order.creation_date = Utc::now() - Duration::days(2);
	order
}

fn order_base(order_no: &str, items: Vec<shopmock_types::baskets::ProductItem>) -> Order {
	let product_sub_total: f64 = items.iter().map(|item| item.price).sum();
	let tax_total: f64 = items.iter().map(|item| item.tax).sum();
	let shipping = baskets::standard_shipping();
	let order_total = round_cents(product_sub_total + shipping.price);

	Order {
		order_no: order_no.to_string(),
		status: OrderStatus::Created,
		confirmation_status: ConfirmationStatus::NotConfirmed,
		export_status: ExportStatus::NotExported,
		payment_status: PaymentStatus::NotPaid,
		shipping_status: ShippingStatus::NotShipped,
		creation_date: Utc::now(),
		currency: FixtureIds::CURRENCY.to_string(),
		customer_info: CustomerInfo::registered(
			FixtureIds::CUSTOMER_ID,
			FixtureIds::CUSTOMER_NO,
			FixtureIds::CUSTOMER_EMAIL,
		),
		order_total,
		product_sub_total: round_cents(product_sub_total),
		shipping_total: shipping.price,
		tax_total: round_cents(tax_total),
		taxation: Taxation::Gross,
		product_items: items,
		billing_address: baskets::shipping_address(),
		shipments: vec![Shipment {
			shipment_id: "me".to_string(),
			gift: false,
			shipping_address: Some(baskets::shipping_address()),
			shipping_method: Some(shipping),
		}],
		payment_instruments: vec![PaymentInstrument {
			payment_instrument_id: Uuid::new_v4().to_string(),
			payment_method_id: "CREDIT_CARD".to_string(),
			amount: order_total,
			payment_card: Some(PaymentCard {
				card_type: "Visa".to_string(),
				masked_number: "************1111".to_string(),
				expiration_month: 1,
				expiration_year: 2030,
				holder: "Jane Doe".to_string(),
			}),
		}],
	}
}
